//! Server-side glue to the external parsing service.

use dioxus::prelude::*;
use serde_json::Value;

/// Submit code to the parse service and return its documentation payload.
#[server]
pub async fn parse_code(code: String) -> Result<Value, ServerFnError> {
    use parser_client::{ParserClient, DEFAULT_ENDPOINT};

    let endpoint =
        std::env::var("PARSER_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let client = ParserClient::new(endpoint);

    client
        .parse(&code)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
