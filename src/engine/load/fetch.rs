use bytes::Bytes;
use std::time::Duration;
use tracing::debug;

use crate::engine::errors::SourceError;

/// One-shot GET of the dataset URL. No retry: a failed fetch surfaces to
/// the caller, who may re-invoke the loader for a manual refresh.
pub async fn fetch_url(url: &str, timeout_secs: u64) -> Result<Bytes, SourceError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| SourceError::Http(e.to_string()))?;

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            SourceError::Timeout(timeout_secs)
        } else {
            SourceError::Http(e.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            SourceError::Timeout(timeout_secs)
        } else {
            SourceError::Http(e.to_string())
        }
    })?;
    debug!(target: "load::fetch", bytes = body.len(), "Fetched dataset");
    Ok(body)
}
