use std::sync::Arc;

use anyhow::Result;
use ec_core::ports::{ClockPort, VisitorRepositoryPort};
use ec_core::{ChurchId, VisitorId};
use tracing::{info, info_span, Instrument};

/// Moves a visitor between the active and archived partitions.
pub struct SetVisitorArchived {
    visitor_repo: Arc<dyn VisitorRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    church_id: ChurchId,
}

impl SetVisitorArchived {
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

    pub async fn execute(&self, id: &VisitorId, archived: bool) -> Result<()> {
        let span = info_span!(
            "usecase.set_visitor_archived.execute",
            church_id = %self.church_id,
            visitor_id = %id,
            archived
        );

        async {
            self.visitor_repo
                .set_archived(&self.church_id, id, archived, self.clock.now_ms())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to update visitor {}: {}", id, e))?;

            info!("Visitor archived flag updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::visitors::test_support::{church, FixedClock, MockVisitorRepo};
    use ec_core::ports::VisitorRepositoryError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_archives_with_clock_timestamp() {
        let mut repo = MockVisitorRepo::new();
        repo.expect_set_archived()
            .with(eq(church()), eq(VisitorId::from("v1")), eq(true), eq(42))
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let uc = SetVisitorArchived::new(Arc::new(repo), Arc::new(FixedClock(42)), church());
        uc.execute(&VisitorId::from("v1"), true).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_visitor_surfaces_as_error() {
        let mut repo = MockVisitorRepo::new();
        repo.expect_set_archived()
            .returning(|_, id, _, _| Err(VisitorRepositoryError::NotFound(id.to_string())));

        let uc = SetVisitorArchived::new(Arc::new(repo), Arc::new(FixedClock(0)), church());
        let err = uc.execute(&VisitorId::from("v9"), false).await.unwrap_err();

        assert!(err.to_string().contains("visitor not found: v9"));
    }
}
