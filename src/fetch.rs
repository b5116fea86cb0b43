//! Fetches a single document from a CDEC endpoint.

use reqwest::StatusCode;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected HTTP status: {0}")]
    Status(StatusCode),
}

/// Issues one GET and returns the response body. No retries, and no timeout
/// beyond the transport default.
pub async fn fetch_text(url: &Url) -> Result<String, FetchError> {
    let response = reqwest::get(url.as_str()).await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(response.text().await?)
}

// -- Tests -------------------------------------------------------------------
