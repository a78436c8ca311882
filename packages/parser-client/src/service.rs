//! Service seam for the parsing backend.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Anything that can turn submitted source text into a documentation value.
///
/// Implemented by [`crate::ParserClient`] for the real service and by
/// [`crate::MockParseService`] in tests.
#[async_trait]
pub trait ParseService: Send + Sync {
    /// Submit source text, returning the documentation payload.
    async fn parse(&self, code: &str) -> Result<Value>;
}
