use std::future::Future;

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::VerificationResult;

/// Failure modes of one verification request. Everything here is terminal
/// for the current lookup and surfaces as an inline message; the `Display`
/// text is exactly what the user sees after the "Error: " prefix.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("{detail}")]
    Api { status: u16, detail: String },
    #[error("Failed to reach verification service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed verification response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Seam between the lookup flow and the wire. Handlers use [`VerifyClient`];
/// tests substitute a stub.
pub trait VerifyApi {
    fn verify(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<VerificationResult, VerifyError>> + Send;
}

/// HTTP client for the external verification service.
#[derive(Clone)]
pub struct VerifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl VerifyClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

impl VerifyApi for VerifyClient {
    async fn verify(&self, address: &str) -> Result<VerificationResult, VerifyError> {
        let url = verify_url(&self.base_url, address);
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VerifyError::Api {
                status: status.as_u16(),
                detail: error_detail(status, &body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(VerifyError::Decode)
    }
}

/// `{base}/verify/{address}` with the address percent-encoded as one path
/// segment.
pub fn verify_url(base_url: &str, address: &str) -> String {
    format!(
        "{}/verify/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(address)
    )
}

/// User-facing message for a non-2xx response: the body's `detail` field
/// when the body is JSON carrying a non-empty one, a bare status line for
/// other JSON bodies, and status plus reason when the body is not JSON.
pub fn error_detail(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("detail")
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error! Status: {}", status.as_u16())),
        Err(_) => format!(
            "HTTP error! Status: {} - {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_percent_encodes_the_address_segment() {
        assert_eq!(
            verify_url("http://localhost:8000", "1A1zP1 eP5Q/Gefi"),
            "http://localhost:8000/verify/1A1zP1%20eP5Q%2FGefi"
        );
    }

    #[test]
    fn url_tolerates_trailing_slash_on_base() {
        assert_eq!(
            verify_url("http://localhost:8000/", "abc"),
            "http://localhost:8000/verify/abc"
        );
    }

    #[test]
    fn detail_field_wins_when_present() {
        assert_eq!(
            error_detail(StatusCode::NOT_FOUND, r#"{"detail":"Address not found"}"#),
            "Address not found"
        );
    }

    #[test]
    fn json_without_detail_falls_back_to_status_code() {
        assert_eq!(
            error_detail(StatusCode::NOT_FOUND, r#"{"message":"nope"}"#),
            "HTTP error! Status: 404"
        );
    }

    #[test]
    fn non_json_body_falls_back_to_status_and_reason() {
        assert_eq!(
            error_detail(StatusCode::BAD_GATEWAY, "<html>upstream died</html>"),
            "HTTP error! Status: 502 - Bad Gateway"
        );
    }

    #[test]
    fn api_error_displays_only_the_detail() {
        let err = VerifyError::Api {
            status: 404,
            detail: "Address not found".to_string(),
        };
        assert_eq!(err.to_string(), "Address not found");
    }
}
