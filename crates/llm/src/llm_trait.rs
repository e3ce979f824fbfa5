use async_trait::async_trait;
use notesync_common::Result;

use crate::types::Summary;

/// Capability to turn meeting notes into a structured summary
///
/// Implementations report every failure as an error; the caller decides
/// whether to degrade.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    /// Summarize raw meeting notes
    async fn summarize(&self, notes: &str) -> Result<Summary>;
}
