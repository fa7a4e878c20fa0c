//! GCP service plumbing

pub mod compute;

use gcp_auth::TokenProvider;

use crate::config::GcpConfig;
use crate::error::Error;
use crate::utils::expand_path;

const COMPUTE_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/compute.readonly";

/// Obtain an OAuth access token, from the configured service-account file
/// when one is set and Application Default Credentials otherwise.
pub async fn access_token(gcp: &GcpConfig) -> Result<String, Error> {
    let scopes = &[COMPUTE_READONLY_SCOPE];
    let token = match &gcp.credentials_file {
        Some(path) => {
            let path = expand_path(path);
            tracing::debug!(file = %path.display(), "using service-account credentials");
            let account = gcp_auth::CustomServiceAccount::from_file(&path)
                .map_err(|e| Error::external("loading GCP credentials", e))?;
            account
                .token(scopes)
                .await
                .map_err(|e| Error::external("obtaining GCP access token", e))?
        }
        None => {
            let provider = gcp_auth::provider()
                .await
                .map_err(|e| Error::external("resolving GCP credentials", e))?;
            provider
                .token(scopes)
                .await
                .map_err(|e| Error::external("obtaining GCP access token", e))?
        }
    };
    Ok(token.as_str().to_string())
}
