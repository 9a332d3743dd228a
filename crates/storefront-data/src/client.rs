//! Outbound HTTP client for the storefront's backend APIs.

use serde::de::DeserializeOwned;
use spin_sdk::http::{Method, Request, Response};
use storefront_core::RequestId;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Map a response status to an error unless it is a 2xx.
///
/// Outbound requests do not follow redirects, so a 3xx is an error too.
pub fn check_status(status: u16, url: &str) -> Result<(), FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            status,
            url: url.to_string(),
        });
    }
    Ok(())
}

/// Client for JSON reads from the backend APIs.
///
/// Every request carries the `x-request-id` of the page render it serves.
pub struct FetchClient {
    request_id: RequestId,
}

impl FetchClient {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    /// GET `url` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let req = Request::builder()
            .method(Method::Get)
            .uri(url)
            .header("accept", "application/json")
            .header("x-request-id", self.request_id.as_str())
            .build();

        let resp: Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        check_status(*resp.status(), url)?;

        serde_json::from_slice(resp.body()).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}
