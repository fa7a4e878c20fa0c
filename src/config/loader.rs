//! Config file loading

use std::env;
use std::path::{Path, PathBuf};

use figment::providers::{Env as FigmentEnv, Format, Yaml};
use figment::Figment;

use crate::config::AxolgoConfig;
use crate::error::Error;

/// Environment variable naming the configuration directory.
pub const CONFIG_PATH_ENV: &str = "AXOLGO_CONFIG_PATH";

/// Fallback configuration directory, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = "./config";

/// Prefix for environment overrides, e.g. `AXOLGO_AWS__REGION`.
const ENV_PREFIX: &str = "AXOLGO_";

/// Optional per-domain override files, merged in this order.
const DOMAINS: [&str; 3] = ["aws", "gcp", "logging"];

/// Resolve the process configuration.
///
/// The directory comes from `flag_path`, then the `AXOLGO_CONFIG_PATH`
/// environment variable, then `./config`. `axolgo.yaml` in that directory
/// is required; `axolgo-{aws,gcp,logging}.yaml` are merged over it when
/// present, and `AXOLGO_*` environment variables override everything.
///
/// Resolving twice re-reads the files and yields an identical record for
/// unchanged inputs.
pub fn resolve(flag_path: Option<&Path>) -> Result<AxolgoConfig, Error> {
    let dir = config_dir(flag_path);

    let base = dir.join("axolgo.yaml");
    // Classify missing/unparsable base up front; figment reports both
    // lazily at extraction, where they would be indistinguishable from
    // type errors.
    let raw = std::fs::read_to_string(&base)
        .map_err(|e| Error::ConfigNotFound { path: base.clone(), source: Box::new(e) })?;
    serde_yaml::from_str::<serde_yaml::Value>(&raw)
        .map_err(|e| Error::ConfigNotFound { path: base.clone(), source: Box::new(e) })?;
    tracing::debug!(file = %base.display(), "using base config");

    let mut figment = Figment::new().merge(Yaml::file_exact(&base));
    for domain in DOMAINS {
        let path = dir.join(format!("axolgo-{domain}.yaml"));
        // Domain override files are optional.
        if path.is_file() {
            tracing::debug!(file = %path.display(), "using {domain} config");
            figment = figment.merge(Yaml::file_exact(path));
        }
    }
    figment = figment.merge(FigmentEnv::prefixed(ENV_PREFIX).split("__"));

    figment.extract().map_err(Error::ConfigDecode)
}

fn config_dir(flag_path: Option<&Path>) -> PathBuf {
    if let Some(path) = flag_path {
        return path.to_path_buf();
    }
    match env::var(CONFIG_PATH_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_CONFIG_DIR),
    }
}
