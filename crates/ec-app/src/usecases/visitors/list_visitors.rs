use std::sync::Arc;

use anyhow::Result;
use ec_core::ports::VisitorRepositoryPort;
use ec_core::{ChurchId, Visitor};
use tracing::{debug, info_span, Instrument};

/// Fetches one archived partition of a church's visitors.
pub struct ListVisitors {
    visitor_repo: Arc<dyn VisitorRepositoryPort>,
    church_id: ChurchId,
}

impl ListVisitors {
    pub fn new(visitor_repo: Arc<dyn VisitorRepositoryPort>, church_id: ChurchId) -> Self {
        Self {
            visitor_repo,
            church_id,
        }
    }

    /// Returns every visitor whose archived flag equals `archived`, in the
    /// order the repository yields them (most recent visit first).
    pub async fn execute(&self, archived: bool) -> Result<Vec<Visitor>> {
        let span = info_span!(
            "usecase.list_visitors.execute",
            church_id = %self.church_id,
            archived
        );

        async {
            let visitors = self
                .visitor_repo
                .list_by_archived(&self.church_id, archived)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to query visitors: {}", e))?;

            debug!(count = visitors.len(), "Visitors fetched");
            Ok(visitors)
        }
        .instrument(span)
        .await
    }
}
