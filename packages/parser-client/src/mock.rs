//! Mock parse service for testing.
//!
//! Provides a configurable mock implementation of the [`ParseService`] trait.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ParserError, Result};
use crate::service::ParseService;

/// Mock parse service with canned responses.
///
/// Responses are keyed by the submitted source text, so tests with
/// overlapping submissions resolve deterministically.
///
/// # Example
///
/// ```rust
/// use parser_client::MockParseService;
/// use serde_json::json;
///
/// let mock = MockParseService::new()
///     .with_documentation("Dim x As Integer", json!({"summary": "declares x"}));
/// ```
#[derive(Default, Clone)]
pub struct MockParseService {
    /// Canned documentation indexed by submitted code
    documentation: Arc<RwLock<HashMap<String, Value>>>,
    /// Code inputs that should fail with an API error
    failures: Arc<RwLock<HashSet<String>>>,
    /// Track submissions for verification
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockParseService {
    /// Create a new empty mock service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned documentation returned when `code` is submitted (builder pattern).
    pub fn with_documentation(self, code: impl Into<String>, documentation: Value) -> Self {
        self.documentation
            .write()
            .unwrap()
            .insert(code.into(), documentation);
        self
    }

    /// Make submissions of `code` fail with an API error (builder pattern).
    pub fn with_failure(self, code: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(code.into());
        self
    }

    /// Source texts submitted so far, in the order the service ran them.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of submissions handled so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Clear recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl ParseService for MockParseService {
    async fn parse(&self, code: &str) -> Result<Value> {
        self.calls.write().unwrap().push(code.to_string());

        if self.failures.read().unwrap().contains(code) {
            return Err(ParserError::Api {
                status: 400,
                message: r#"{"error": "No VBA code provided"}"#.to_string(),
            });
        }

        self.documentation
            .read()
            .unwrap()
            .get(code)
            .cloned()
            .ok_or_else(|| ParserError::Api {
                status: 404,
                message: format!("no canned documentation for {code:?}"),
            })
    }
}
