//! Compute Engine instance listing

use anyhow::Context;
use serde::Deserialize;

use crate::config::AxolgoConfig;
use crate::error::Error;

/// Flag values for the `listInstances` command.
#[derive(Debug, Default)]
pub struct ListInstancesOptions {
    pub project: String,
    pub zone: Option<String>,
    pub ids: Vec<String>,
    pub names: Vec<String>,
    pub max_results: Option<u32>,
}

/// Instance listing response, reduced to the fields we report.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceList {
    #[serde(default)]
    pub items: Vec<Instance>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zone: Option<String>,
    pub status: Option<String>,
    pub machine_type: Option<String>,
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NetworkInterface {
    pub name: Option<String>,
    #[serde(rename = "networkIP")]
    pub network_ip: Option<String>,
    #[serde(rename = "accessConfigs", default)]
    pub access_configs: Vec<AccessConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccessConfig {
    #[serde(rename = "natIP")]
    pub nat_ip: Option<String>,
}

/// Build a Compute Engine filter expression from id and name lists:
/// `(id = 1) or (id = 2) or (name = web-1)`. Empty lists contribute
/// nothing; an empty result means no filtering.
pub fn build_filter(ids: &[String], names: &[String]) -> String {
    let mut clauses = Vec::with_capacity(ids.len() + names.len());
    for id in ids {
        clauses.push(format!("(id = {id})"));
    }
    for name in names {
        clauses.push(format!("(name = {name})"));
    }
    clauses.join(" or ")
}

/// Run `listInstances`: resolve the zone, authenticate, list and print
/// one block per instance.
pub async fn list_instances(
    opts: ListInstancesOptions,
    config: &AxolgoConfig,
) -> anyhow::Result<()> {
    // Fall back to the configured default zone.
    let zone = opts
        .zone
        .or_else(|| config.gcp.zone.clone())
        .context("no --zone given and no default zone configured")?;

    let filter = build_filter(&opts.ids, &opts.names);
    let token = super::access_token(&config.gcp).await?;

    let url = format!(
        "https://compute.googleapis.com/compute/v1/projects/{}/zones/{}/instances",
        opts.project, zone
    );
    let client = reqwest::Client::new();
    let mut request = client.get(&url).bearer_auth(&token);
    if !filter.is_empty() {
        request = request.query(&[("filter", filter.as_str())]);
    }
    if let Some(max_results) = opts.max_results {
        request = request.query(&[("maxResults", max_results.to_string().as_str())]);
    }

    let response = request
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::external("listing Compute Engine instances", e))?;
    let list: InstanceList = response
        .json()
        .await
        .map_err(|e| Error::external("decoding Compute Engine response", e))?;

    tracing::debug!(
        next_page_token = ?list.next_page_token,
        instances = list.items.len(),
        "list-instances response"
    );
    // Pagination is not followed; the first page is all we report.
    for instance in &list.items {
        tracing::info!("Name: {}", instance.name.as_deref().unwrap_or("-"));
        tracing::info!("    ID: {}", instance.id.as_deref().unwrap_or("-"));
        tracing::info!("    Zone: {}", instance.zone.as_deref().unwrap_or("-"));
        tracing::info!("    Status: {}", instance.status.as_deref().unwrap_or("-"));
        tracing::info!("    Machine type: {}", instance.machine_type.as_deref().unwrap_or("-"));
        for interface in &instance.network_interfaces {
            tracing::info!("    NetworkInterface: {}", interface.name.as_deref().unwrap_or("-"));
            for access in &interface.access_configs {
                if let Some(ip) = &access.nat_ip {
                    tracing::info!("        IP: {ip}");
                }
            }
        }
    }

    Ok(())
}
