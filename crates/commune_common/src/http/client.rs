// --- File: crates/commune_common/src/http/client.rs ---
use reqwest::{header, Client, Error as ReqwestError, Response};
use std::time::Duration;

/// Creates a new HTTP client with custom configuration.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
/// * `follow_redirects` - Whether the client should follow redirects
pub fn create_client(timeout_secs: u64, follow_redirects: bool) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(if follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        })
        .build()
}

/// GET `url` with a bearer token and a JSON content type.
pub async fn get_with_bearer(
    client: &Client,
    url: &str,
    access_token: &str,
) -> Result<Response, ReqwestError> {
    client
        .get(url)
        .bearer_auth(access_token)
        .header(header::CONTENT_TYPE, "application/json")
        .send()
        .await
}

