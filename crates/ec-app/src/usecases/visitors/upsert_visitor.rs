use std::sync::Arc;

use ec_core::ports::{ClockPort, VisitorRepositoryError, VisitorRepositoryPort};
use ec_core::visitor::VisitorValidationError;
use ec_core::{ChurchId, Visitor, VisitorDraft, VisitorId};
use thiserror::Error;
use tracing::{info, info_span, Instrument};

#[derive(Debug, Error)]
pub enum UpsertVisitorError {
    #[error(transparent)]
    Validation(#[from] VisitorValidationError),

    #[error("visitor not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] VisitorRepositoryError),
}

/// Creates a visitor, or edits one when an id is given.
///
/// Editing keeps the follow-up status and archived flag of the stored record.
pub struct UpsertVisitor {
    visitor_repo: Arc<dyn VisitorRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    church_id: ChurchId,
}

impl UpsertVisitor {
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

    pub async fn execute(
        &self,
        draft: VisitorDraft,
        existing: Option<VisitorId>,
    ) -> Result<Visitor, UpsertVisitorError> {
        let span = info_span!(
            "usecase.upsert_visitor.execute",
            church_id = %self.church_id,
            editing = existing.is_some()
        );

        async {
            let draft = draft.validate()?;
            let now_ms = self.clock.now_ms();

            let visitor = match existing {
                Some(id) => {
                    let mut stored = self
                        .visitor_repo
                        .find_by_id(&self.church_id, &id)
                        .await?
                        .ok_or_else(|| UpsertVisitorError::NotFound(id.to_string()))?;
                    stored.apply_draft(draft, now_ms);
                    stored
                }
                None => Visitor::from_draft(VisitorId::new(), draft, now_ms),
            };

            self.visitor_repo.save(&self.church_id, &visitor).await?;

            info!(visitor_id = %visitor.id, "Visitor saved");
            Ok(visitor)
        }
        .instrument(span)
        .await
    }
}
