use crate::search::types::ExtractedIntent;
use async_trait::async_trait;

/// Common trait for free-text intent extraction backends.
/// Failures never escape: every error path yields `None`.
#[async_trait]
pub trait IntentExtractor: Send + Sync {
    /// Extract filters from a non-empty, trimmed query
    async fn extract(&self, query: &str) -> Option<ExtractedIntent>;

    /// Get the name of the extraction backend
    fn provider_name(&self) -> &'static str;
}
