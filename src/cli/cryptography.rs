//! `cryptography` command group

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::cryptography as crypt;

#[derive(Args)]
pub struct CryptographyArgs {
    #[command(subcommand)]
    command: CryptographyCommands,
}

#[derive(Subcommand)]
enum CryptographyCommands {
    /// Encrypt a message; prints hex-encoded ciphertext to stdout
    Encrypt(MessageArgs),

    /// Decrypt a hex-encoded message; prints the plaintext to stdout
    Decrypt(MessageArgs),

    /// Encrypt a file
    #[command(name = "encryptFile")]
    EncryptFile(FileArgs),

    /// Decrypt a file
    #[command(name = "decryptFile")]
    DecryptFile(FileArgs),

    /// Generate a passphrase and save it to a file
    #[command(name = "genPassphrase")]
    GenPassphrase(GenPassphraseArgs),
}

#[derive(Args)]
pub struct MessageArgs {
    /// Key file holding the passphrase; prompts interactively when omitted
    #[arg(short = 'k', long = "key-file", value_name = "KEYFILE")]
    key_file: Option<PathBuf>,

    /// Message to process; read from stdin when omitted
    #[arg(short = 'm', long = "message", value_name = "MESSAGE")]
    message: Option<String>,
}

#[derive(Args)]
pub struct FileArgs {
    /// Key file holding the passphrase; prompts interactively when omitted
    #[arg(short = 'k', long = "key-file", value_name = "KEYFILE")]
    key_file: Option<PathBuf>,

    /// File to process
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: PathBuf,

    /// Output file; defaults to the input name with an
    /// `-encrypted`/`-decrypted` suffix
    #[arg(short = 'o', long = "output-file", value_name = "OUTFILE")]
    output_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenPassphraseArgs {
    /// File the generated passphrase is written to
    #[arg(short = 's', long = "save-file", value_name = "SAVEFILE")]
    save_file: PathBuf,
}

pub async fn run(args: CryptographyArgs) -> Result<()> {
    match args.command {
        CryptographyCommands::Encrypt(message_args) => {
            let passphrase = read_passphrase(message_args.key_file.as_deref())?;
            let message = read_message(message_args.message)?;
            let data = crypt::encrypt(message.as_bytes(), &passphrase)?;
            println!("{}", hex::encode(data));
            Ok(())
        }
        CryptographyCommands::Decrypt(message_args) => {
            let passphrase = read_passphrase(message_args.key_file.as_deref())?;
            let message = read_message(message_args.message)?;
            let data = hex::decode(message.trim())
                .context("message is not valid hex-encoded ciphertext")?;
            let plaintext = crypt::decrypt(&data, &passphrase)?;
            println!("{}", String::from_utf8_lossy(&plaintext));
            Ok(())
        }
        CryptographyCommands::EncryptFile(file_args) => {
            let passphrase = read_passphrase(file_args.key_file.as_deref())?;
            let output =
                crypt::encrypt_file(&file_args.file, &passphrase, file_args.output_file)?;
            tracing::info!("Encrypted file written to {}", output.display());
            Ok(())
        }
        CryptographyCommands::DecryptFile(file_args) => {
            let passphrase = read_passphrase(file_args.key_file.as_deref())?;
            let output =
                crypt::decrypt_file(&file_args.file, &passphrase, file_args.output_file)?;
            tracing::info!("Decrypted file written to {}", output.display());
            Ok(())
        }
        CryptographyCommands::GenPassphrase(gen_args) => {
            let passphrase = crypt::generate_passphrase(crypt::PASSPHRASE_LEN);
            fs::write(&gen_args.save_file, passphrase).with_context(|| {
                format!("failed to write passphrase to {}", gen_args.save_file.display())
            })?;
            tracing::info!("Passphrase saved to {}", gen_args.save_file.display());
            Ok(())
        }
    }
}

/// Passphrase bytes from the key file, or an interactive hidden prompt
/// when no key file is given. Key files are used as-is, byte for byte.
fn read_passphrase(key_file: Option<&Path>) -> Result<Vec<u8>> {
    match key_file {
        Some(path) => fs::read(path)
            .with_context(|| format!("failed to read key file {}", path.display())),
        None => {
            let passphrase = dialoguer::Password::new()
                .with_prompt("Enter passphrase")
                .interact()
                .context("failed to read passphrase")?;
            Ok(passphrase.into_bytes())
        }
    }
}

/// The message flag value, or stdin read to EOF when the flag is absent.
fn read_message(message: Option<String>) -> Result<String> {
    match message {
        Some(message) => Ok(message),
        None => {
            eprintln!("Enter message, then press Ctrl+D to finish:");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read message from stdin")?;
            Ok(buffer)
        }
    }
}
