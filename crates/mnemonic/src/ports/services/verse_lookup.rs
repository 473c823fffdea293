//! Verse Lookup Port

use async_trait::async_trait;

use crate::domain::{LookupError, VerseReference, VerseText};

/// Service interface for fetching scripture text
#[async_trait]
pub trait VerseLookup: Send + Sync {
    /// Fetch the text of one passage. Exactly one request, no retry.
    async fn fetch(&self, reference: &VerseReference) -> Result<VerseText, LookupError>;
}
