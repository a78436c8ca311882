use serde::{Deserialize, Serialize};

/// Request body for the parse endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ParseRequest {
    pub code: String,
}

/// Response body from the parse endpoint.
///
/// The documentation payload is an arbitrary nested JSON value; the client
/// never interprets its structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseResponse {
    pub documentation: serde_json::Value,
}
