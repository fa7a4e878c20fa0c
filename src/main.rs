//! axolgo: command-line toolkit for AWS, GCP and cryptography chores

use std::process::ExitCode;

use axolgo::{cli, error};

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code =
                err.downcast_ref::<error::Error>().map(error::Error::exit_code).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
