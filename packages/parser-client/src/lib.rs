//! Pure REST client for the VBA parsing service.
//!
//! A minimal client for the external parsing service. Submits pasted source
//! text and returns the documentation structure the service extracted from
//! it.
//!
//! # Example
//!
//! ```rust,ignore
//! use parser_client::ParserClient;
//!
//! let client = ParserClient::new("http://localhost:5000/parse_vba");
//!
//! let documentation = client.parse("Dim x As Integer").await?;
//! println!("{documentation:#}");
//! ```

pub mod error;
pub mod mock;
pub mod service;
pub mod types;

pub use error::{ParserError, Result};
pub use mock::MockParseService;
pub use service::ParseService;
pub use types::{ParseRequest, ParseResponse};

use async_trait::async_trait;
use serde_json::Value;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/parse_vba";

pub struct ParserClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ParserClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submit source text for parsing. Returns the `documentation` field of
    /// the response body.
    ///
    /// No retry, no client-side timeout; the transport's defaults apply.
    pub async fn parse(&self, code: &str) -> Result<Value> {
        tracing::debug!(bytes = code.len(), endpoint = %self.endpoint, "Submitting code for parsing");

        let request = ParseRequest {
            code: code.to_string(),
        };
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ParserError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ParseResponse = resp.json().await?;
        tracing::debug!("Parse submission succeeded");
        Ok(parsed.documentation)
    }
}

#[async_trait]
impl ParseService for ParserClient {
    async fn parse(&self, code: &str) -> Result<Value> {
        ParserClient::parse(self, code).await
    }
}
