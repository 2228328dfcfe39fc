use std::sync::Arc;

use anyhow::Result;
use ec_core::ports::{ClockPort, VisitorRepositoryPort};
use ec_core::{ChurchId, FollowupStatus, VisitorId};
use tracing::{info, info_span, Instrument};

/// Marks a visitor's follow-up as done.
pub struct FinishFollowup {
    visitor_repo: Arc<dyn VisitorRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    church_id: ChurchId,
}

impl FinishFollowup {
    pub fn new(
        visitor_repo: Arc<dyn VisitorRepositoryPort>,
        clock: Arc<dyn ClockPort>,
        church_id: ChurchId,
    ) -> Self {
        Self {
            visitor_repo,
            clock,
            church_id,
        }
    }

    pub async fn execute(&self, id: &VisitorId) -> Result<()> {
        let span = info_span!(
            "usecase.finish_followup.execute",
            church_id = %self.church_id,
            visitor_id = %id
        );

        async {
            self.visitor_repo
                .set_followup_status(&self.church_id, id, FollowupStatus::Done, self.clock.now_ms())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to finish follow-up for {}: {}", id, e))?;

            info!("Follow-up finished");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
