//! Error taxonomy for the REST service layer.
//!
//! Every failure is surfaced to the calling controller unchanged; a
//! missing record is not distinguished from any other non-2xx
//! response. Shared response-parsing helpers live here so the hunt
//! and task clients classify failures identically.

use validator::ValidationErrors;

/// Errors surfaced by the hunt and task REST services.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout) or
    /// a 2xx payload could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        message: String,
        /// `title` field from the JSON error body, if present.
        title: Option<String>,
    },

    /// The draft failed client-side validation; no request was sent.
    #[error("Invalid draft: {0}")]
    InvalidDraft(#[from] ValidationErrors),
}

impl ApiError {
    /// HTTP status of the failure, when one exists. Transport
    /// failures that never received a response have none.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request(err) => err.status().map(|status| status.as_u16()),
            ApiError::Api { status, .. } => Some(*status),
            ApiError::InvalidDraft(_) => None,
        }
    }
}

/// Ensure the response has a success status code. Returns the
/// response unchanged on success, or an [`ApiError::Api`] carrying the
/// status, body text, and optional body `title` on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let title = error_title(&body);
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: body,
            title,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

/// Extract the `title` field from a JSON error body, if there is one.
fn error_title(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("title")?.as_str().map(str::to_string))
}
