//! Configuration loading and merging
//!
//! Handles loading from a base YAML file, optional per-domain override
//! files and environment variables with proper precedence
//! (Env > domain file > base file).

pub mod loader;

pub use loader::resolve;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The typed configuration record. Resolved once per process and passed
/// by reference to command handlers; nothing mutates it after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxolgoConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub gcp: GcpConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level verbosity: 0 keeps the default level, 1 maps to DEBUG,
    /// anything higher to TRACE.
    #[serde(default)]
    pub verbosity: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsConfig {
    /// AWS region; the SDK's own provider chain applies when unset.
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpConfig {
    /// Service-account credentials file. A leading `~` is expanded.
    /// Application Default Credentials apply when unset.
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
    /// Default zone for commands that take an optional `--zone`.
    #[serde(default)]
    pub zone: Option<String>,
}
