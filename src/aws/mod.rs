//! AWS service plumbing

pub mod ec2;
pub mod rds;

use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::config::AwsConfig;

/// Load the shared SDK configuration, honoring the configured region when
/// one is set and the SDK's own provider chain otherwise.
pub async fn sdk_config(aws: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &aws.region {
        loader = loader.region(Region::new(region.clone()));
    }
    loader.load().await
}
