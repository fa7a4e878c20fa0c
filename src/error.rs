//! Error taxonomy and exit-code mapping

use std::path::PathBuf;

/// Errors that abort the process. Flag validation errors never reach this
/// type; clap reports those before any command runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The required base configuration file is absent or unparsable.
    #[error("configuration file not found or unreadable: {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The merged configuration could not be decoded into the typed record.
    #[error("invalid configuration")]
    ConfigDecode(#[source] figment::Error),

    /// A call to an external surface (SDK, HTTP API, filesystem) failed.
    #[error("{context} failed")]
    ExternalCall {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn external(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::ExternalCall { context: context.into(), source: Box::new(source) }
    }

    /// Process exit code for this error kind. Configuration errors exit
    /// with 2, matching clap's code for usage errors; everything else
    /// exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::ConfigNotFound { .. } | Error::ConfigDecode(_) => 2,
            Error::ExternalCall { .. } => 1,
        }
    }
}
