//! The seams between the workflows and their environment.
//!
//! A workflow consumes two capabilities it does not implement itself:
//!
//! - [`ApiClient`] — issues one blocking request/response exchange. Every
//!   call carries a *logical name* (`"PATCH /teams/{id}"`) distinct from
//!   the literal path, so the external statistics collector can aggregate
//!   templated endpoints across varying identifiers.
//! - [`StatsCollector`] — receives exactly one success or failure report
//!   per issued call.
//!
//! [`ApiResponse`] is deliberately dumb: status, headers, raw text body.
//! Body parsing happens after the fact (see [`crate::extract`]) because
//! the target API has no uniform response envelope.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;

/// HTTP methods the workflows use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One HTTP response as the workflows see it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers. Lookup via [`ApiResponse::header`] is
    /// case-insensitive, so the adapter may store names as received.
    pub headers: HashMap<String, String>,
    /// Raw response body text. May be empty or non-JSON.
    pub body: String,
}

impl ApiResponse {
    /// Build a response with no headers and the given body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body as JSON. `None` if the body is empty or malformed —
    /// a parse failure is a normal outcome here, not an error.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// The HTTP transport capability the environment supplies.
///
/// `name` is the logical stat label for the call; `path` is the literal
/// request path (relative to whatever base the implementation targets).
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn request(
        &self,
        method: Method,
        name: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError>;
}

/// The statistics sink the workflows report into.
///
/// Exactly one call per issued request: soft failures arrive as
/// `success`, hard failures as `failure` with a human-readable reason.
/// Skipped steps report nothing.
pub trait StatsCollector: Send + Sync {
    fn success(&self, name: &str);
    fn failure(&self, name: &str, reason: &str);
}

// A scheduler typically shares one client and one collector across many
// virtual users, so both capabilities pass through `Arc`.

#[async_trait]
impl<T> ApiClient for std::sync::Arc<T>
where
    T: ApiClient + ?Sized,
{
    async fn request(
        &self,
        method: Method,
        name: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        (**self).request(method, name, path, body).await
    }
}

impl<T> StatsCollector for std::sync::Arc<T>
where
    T: StatsCollector + ?Sized,
{
    fn success(&self, name: &str) {
        (**self).success(name)
    }

    fn failure(&self, name: &str, reason: &str) {
        (**self).failure(name, reason)
    }
}
