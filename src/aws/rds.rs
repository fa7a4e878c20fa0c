//! RDS parameter group modification

use std::fs;
use std::path::Path;

use anyhow::Context;
use aws_sdk_rds::types::{ApplyMethod, Parameter};
use aws_sdk_rds::Client;

use crate::config::AxolgoConfig;
use crate::error::Error;

/// The API rejects more than 20 parameters per modify call.
const MAX_PARAMETERS_PER_CALL: usize = 20;

/// Which kind of parameter group a modify call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterGroupKind {
    Instance,
    Cluster,
}

/// Read a parameter file into API parameters. The file holds two optional
/// buckets: `static` parameters apply on the next reboot, `dynamic` ones
/// immediately.
///
/// ```yaml
/// static:
///   max_connections: 500
/// dynamic:
///   autocommit: true
/// ```
pub fn load_parameters(path: &Path) -> anyhow::Result<Vec<Parameter>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed reading parameter file: {}", path.display()))?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&text)
        .with_context(|| format!("invalid YAML in parameter file: {}", path.display()))?;

    let mut parameters = Vec::new();
    for (section, method) in
        [("static", ApplyMethod::PendingReboot), ("dynamic", ApplyMethod::Immediate)]
    {
        let Some(value) = doc.get(section) else { continue };
        let mapping = value
            .as_mapping()
            .with_context(|| format!("'{section}' section must be a mapping of name: value"))?;
        for (name, value) in mapping {
            let name = name
                .as_str()
                .with_context(|| format!("non-string parameter name in '{section}' section"))?;
            parameters.push(
                Parameter::builder()
                    .parameter_name(name)
                    .parameter_value(scalar_to_string(value).with_context(|| {
                        format!("parameter '{name}' must have a scalar value")
                    })?)
                    .apply_method(method.clone())
                    .build(),
            );
        }
    }
    Ok(parameters)
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Run `modifyDBParameterGroup` / `modifyDBClusterParameterGroup`:
/// read the parameter file and submit the parameters in API-sized chunks.
pub async fn modify_parameter_group(
    kind: ParameterGroupKind,
    name: &str,
    parameter_file: &Path,
    config: &AxolgoConfig,
) -> anyhow::Result<()> {
    let parameters = load_parameters(parameter_file)?;
    if parameters.is_empty() {
        anyhow::bail!(
            "parameter file {} defines no static or dynamic parameters",
            parameter_file.display()
        );
    }

    let shared = super::sdk_config(&config.aws).await;
    let client = Client::new(&shared);

    for chunk in parameters.chunks(MAX_PARAMETERS_PER_CALL) {
        match kind {
            ParameterGroupKind::Instance => {
                client
                    .modify_db_parameter_group()
                    .db_parameter_group_name(name)
                    .set_parameters(Some(chunk.to_vec()))
                    .send()
                    .await
                    .map_err(|e| Error::external("modifying DB parameter group", e))?;
            }
            ParameterGroupKind::Cluster => {
                client
                    .modify_db_cluster_parameter_group()
                    .db_cluster_parameter_group_name(name)
                    .set_parameters(Some(chunk.to_vec()))
                    .send()
                    .await
                    .map_err(|e| Error::external("modifying DB cluster parameter group", e))?;
            }
        }
    }

    tracing::info!("Modified {} parameters in parameter group {}", parameters.len(), name);
    Ok(())
}
