// --- File: crates/commune_common/src/http.rs ---
use reqwest::Response;
use thiserror::Error;

use crate::error::CommuneError;

// Include the client module
pub mod client;

/// A non-2xx response, with the body text read for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{status} {body}")]
pub struct StatusFailure {
    pub status: u16,
    pub body: String,
}

impl StatusFailure {
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl From<StatusFailure> for CommuneError {
    fn from(failure: StatusFailure) -> Self {
        match failure.status {
            404 => CommuneError::NotFoundError(failure.body),
            429 => CommuneError::RateLimitError(failure.body),
            _ => CommuneError::HttpError(failure.to_string()),
        }
    }
}

/// Passes a successful response through; turns anything else into a
/// `StatusFailure` carrying the status code and the response body.
///
/// A body that cannot be read is reported as empty.
pub async fn check_status(response: Response) -> Result<Response, StatusFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StatusFailure {
        status: status.as_u16(),
        body,
    })
}

/// Joins a base URL and a path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.example/", "/me"), "https://api.example/me");
        assert_eq!(join_url("https://api.example", "me"), "https://api.example/me");
    }

    #[tokio::test]
    async fn test_check_status_reports_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let response = reqwest::get(format!("{}/broken", server.uri())).await.unwrap();
        let failure = check_status(response).await.unwrap_err();

        assert_eq!(failure.status, 503);
        assert_eq!(failure.body, "maintenance");
        assert_eq!(failure.to_string(), "503 maintenance");
    }

    #[tokio::test]
    async fn test_check_status_passes_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string("fine"))
            .mount(&server)
            .await;

        let response = reqwest::get(format!("{}/ok", server.uri())).await.unwrap();
        let response = check_status(response).await.unwrap();
        assert_eq!(response.text().await.unwrap(), "fine");
    }
}
