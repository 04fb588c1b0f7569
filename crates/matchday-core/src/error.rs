//! Transport-level error type.
//!
//! `ClientError` covers failures *below* the HTTP status line — connection
//! refused, request build errors, unreadable bodies. Anything the server
//! actually answered, including 4xx/5xx, arrives as an [`ApiResponse`] and
//! is classified by the workflow, not raised as an error.
//!
//! [`ApiResponse`]: crate::client::ApiResponse

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}
