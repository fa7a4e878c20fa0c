//! EC2 instance description

use aws_sdk_ec2::types::Filter;
use aws_sdk_ec2::Client;

use crate::config::AxolgoConfig;
use crate::error::Error;

/// Flag values for the `describeInstances` command.
#[derive(Debug, Default)]
pub struct DescribeInstancesOptions {
    pub instance_ids: Vec<String>,
    pub private_ip_addresses: Vec<String>,
    pub public_ip_addresses: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub iam_instance_profile_arns: Vec<String>,
    pub max_results: Option<i32>,
}

/// Build the filter list for a describe-instances call. Empty flag lists
/// contribute no filter entry; order follows the declaration order below.
pub fn build_filters(opts: &DescribeInstancesOptions) -> Vec<Filter> {
    let name_values: [(&str, &[String]); 5] = [
        ("instance-id", &opts.instance_ids),
        ("private-ip-address", &opts.private_ip_addresses),
        ("ip-address", &opts.public_ip_addresses),
        ("instance.group-id", &opts.security_group_ids),
        ("iam-instance-profile.arn", &opts.iam_instance_profile_arns),
    ];

    let mut filters = Vec::new();
    for (name, values) in name_values {
        tracing::trace!(filter = name, count = values.len(), "building filter");
        if !values.is_empty() {
            filters.push(Filter::builder().name(name).set_values(Some(values.to_vec())).build());
        }
    }
    filters
}

/// Run `describeInstances`: filter, call, print one block per instance.
pub async fn describe_instances(
    opts: DescribeInstancesOptions,
    config: &AxolgoConfig,
) -> Result<(), Error> {
    let filters = build_filters(&opts);

    let shared = super::sdk_config(&config.aws).await;
    let client = Client::new(&shared);

    let mut request = client.describe_instances();
    if !filters.is_empty() {
        request = request.set_filters(Some(filters));
    }
    // MaxResults is only forwarded when given: a set MaxResults makes the
    // API return an empty first page for some filter combinations.
    if let Some(max_results) = opts.max_results {
        request = request.max_results(max_results);
    }

    let output =
        request.send().await.map_err(|e| Error::external("describing EC2 instances", e))?;

    tracing::debug!(
        next_token = ?output.next_token(),
        reservations = output.reservations().len(),
        "describe-instances response"
    );
    // Pagination is not followed; the first page is all we report.
    for reservation in output.reservations() {
        tracing::info!("Reservation ID: {}", reservation.reservation_id().unwrap_or("-"));
        for instance in reservation.instances() {
            let security_group_ids: Vec<&str> = instance
                .security_groups()
                .iter()
                .filter_map(|sg| sg.group_id())
                .collect();
            let tags: Vec<String> = instance
                .tags()
                .iter()
                .map(|t| format!("{}={}", t.key().unwrap_or(""), t.value().unwrap_or("")))
                .collect();

            tracing::info!("    Instance ID: {}", instance.instance_id().unwrap_or("-"));
            tracing::info!(
                "    Private IP address: {}",
                instance.private_ip_address().unwrap_or("-")
            );
            tracing::info!(
                "    Public IP address: {}",
                instance.public_ip_address().unwrap_or("-")
            );
            tracing::info!("    Security group IDs: [{}]", security_group_ids.join(", "));
            tracing::info!(
                "    IAM instance profile ARN: [{}]",
                instance.iam_instance_profile().and_then(|p| p.arn()).unwrap_or("")
            );
            tracing::info!(
                "    Instance type: {}",
                instance.instance_type().map(|t| t.as_str()).unwrap_or("-")
            );
            tracing::info!("    Tags: [{}]", tags.join(", "));
        }
    }

    Ok(())
}
