//! Cart service boundary.

use async_trait::async_trait;
use spin_sdk::http::{Method, Request, Response};
use storefront_commerce::AddToCartRequest;
use storefront_core::RequestId;

use crate::client::{check_status, FetchError};

/// Successful cart API response. The storefront only needs to know it succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct CartResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

/// External cart mutation service.
#[async_trait(?Send)]
pub trait CartService {
    /// Add the given lines to the shopper's cart.
    async fn add_to_cart(&self, items: &[AddToCartRequest]) -> Result<CartResponse, FetchError>;
}

/// Caller credentials forwarded to the cart API.
#[derive(Debug, Clone, Default)]
pub struct ForwardedAuth {
    pub cookie: Option<String>,
    pub authorization: Option<String>,
}

/// `CartService` backed by the cart HTTP API.
///
/// Posts the items as a JSON array to the cart items endpoint. The cart API
/// identifies the shopper from the forwarded cookie or bearer token and
/// answers 403 for anonymous callers.
pub struct CartClient {
    items_url: String,
    request_id: RequestId,
    auth: ForwardedAuth,
}

impl CartClient {
    pub fn new(items_url: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            items_url: items_url.into(),
            request_id,
            auth: ForwardedAuth::default(),
        }
    }

    /// Forward the shopper's credentials.
    pub fn with_auth(mut self, auth: ForwardedAuth) -> Self {
        self.auth = auth;
        self
    }

    pub fn items_url(&self) -> &str {
        &self.items_url
    }

    fn build_request(&self, items: &[AddToCartRequest]) -> Result<Request, FetchError> {
        let body = serde_json::to_vec(items).map_err(|e| FetchError::Request(e.to_string()))?;

        let mut builder = Request::builder();
        builder
            .method(Method::Post)
            .uri(self.items_url.as_str())
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .header("x-request-id", self.request_id.as_str());

        if let Some(cookie) = &self.auth.cookie {
            builder.header("cookie", cookie.as_str());
        }
        if let Some(authorization) = &self.auth.authorization {
            builder.header("authorization", authorization.as_str());
        }

        Ok(builder.body(body).build())
    }
}

#[async_trait(?Send)]
impl CartService for CartClient {
    async fn add_to_cart(&self, items: &[AddToCartRequest]) -> Result<CartResponse, FetchError> {
        let req = self.build_request(items)?;

        let resp: Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = *resp.status();
        check_status(status, &self.items_url)?;

        // Some cart deployments answer with an empty body.
        let body = serde_json::from_slice(resp.body()).ok();

        Ok(CartResponse { status, body })
    }
}
