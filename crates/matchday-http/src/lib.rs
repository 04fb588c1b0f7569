//! reqwest-backed [`ApiClient`] for the matchday workflows.
//!
//! One pooled client per instance, cloned cheaply across virtual users.
//! Retries, redirect policy beyond reqwest's defaults, and pacing are not
//! this crate's business — a call either yields the server's response
//! (whatever its status) or a [`ClientError`].

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use matchday_core::{ApiClient, ApiResponse, ClientError, Method};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport targeting one base URL.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApiClient {
    /// Build a client for `base_url` with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn request(
        &self,
        method: Method,
        name: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url_for(path);

        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Patch => self.client.patch(&url),
        };
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!("[HttpClient] {} {} ({})", method, url, name);

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Body(e.to_string()))?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_is_slash_safe() {
        let client = HttpApiClient::new("http://localhost:8080/");
        assert_eq!(client.url_for("/teams"), "http://localhost:8080/teams");
        assert_eq!(client.url_for("teams"), "http://localhost:8080/teams");

        let client = HttpApiClient::new("http://localhost:8080");
        assert_eq!(
            client.url_for("/tournaments/T1/matches"),
            "http://localhost:8080/tournaments/T1/matches"
        );
    }
}
