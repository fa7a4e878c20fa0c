//! `gcp` command group

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::AxolgoConfig;
use crate::gcp::compute;

#[derive(Args)]
pub struct GcpArgs {
    #[command(subcommand)]
    command: GcpCommands,
}

#[derive(Subcommand)]
enum GcpCommands {
    /// Compute Engine operations
    Compute(ComputeArgs),
}

#[derive(Args)]
pub struct ComputeArgs {
    #[command(subcommand)]
    command: ComputeCommands,
}

#[derive(Subcommand)]
enum ComputeCommands {
    /// List Compute Engine instances matching the given criteria
    #[command(name = "listInstances")]
    ListInstances(ListInstancesArgs),
}

#[derive(Args)]
pub struct ListInstancesArgs {
    /// Project ID
    #[arg(short = 'p', long = "project", value_name = "PROJECT")]
    project: String,

    /// Zone; the configured default zone applies when omitted
    #[arg(short = 'z', long = "zone", value_name = "ZONE")]
    zone: Option<String>,

    /// Instance IDs
    #[arg(short = 'i', long = "id", value_name = "ID")]
    ids: Vec<String>,

    /// Instance names
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    names: Vec<String>,

    /// Maximum number of records per batch
    #[arg(short = 'r', long = "max-results", value_name = "N")]
    max_results: Option<u32>,
}

pub async fn run(args: GcpArgs, config: &AxolgoConfig) -> Result<()> {
    match args.command {
        GcpCommands::Compute(compute_args) => match compute_args.command {
            ComputeCommands::ListInstances(list) => {
                let opts = compute::ListInstancesOptions {
                    project: list.project,
                    zone: list.zone,
                    ids: list.ids,
                    names: list.names,
                    max_results: list.max_results,
                };
                compute::list_instances(opts, config).await
            }
        },
    }
}
