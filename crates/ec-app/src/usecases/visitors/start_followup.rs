use std::sync::Arc;

use ec_core::ports::{ClockPort, LinkOpenerPort, VisitorRepositoryError, VisitorRepositoryPort};
use ec_core::visitor::followup::whatsapp_link;
use ec_core::{ChurchId, FollowupStatus, Visitor};
use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowupOutcome {
    /// The WhatsApp conversation was handed to the link opener.
    LinkOpened { url: String },
    /// Status was updated but there is no number to contact.
    MissingPhone,
}

#[derive(Debug, Error)]
pub enum FollowupError {
    #[error(transparent)]
    Repository(#[from] VisitorRepositoryError),

    #[error("failed to open link: {0}")]
    LinkOpen(String),
}

/// Marks a visitor as in progress and opens a greeting conversation on
/// WhatsApp when the visitor has a phone number.
pub struct StartFollowup {
    visitor_repo: Arc<dyn VisitorRepositoryPort>,
    link_opener: Arc<dyn LinkOpenerPort>,
    clock: Arc<dyn ClockPort>,
    church_id: ChurchId,
}

impl StartFollowup {
    pub fn new(
        visitor_repo: Arc<dyn VisitorRepositoryPort>,
        link_opener: Arc<dyn LinkOpenerPort>,
        clock: Arc<dyn ClockPort>,
        church_id: ChurchId,
    ) -> Self {
        Self {
            visitor_repo,
            link_opener,
            clock,
            church_id,
        }
    }

    pub async fn execute(&self, visitor: &Visitor) -> Result<FollowupOutcome, FollowupError> {
        let span = info_span!(
            "usecase.start_followup.execute",
            church_id = %self.church_id,
            visitor_id = %visitor.id
        );

        async {
            self.visitor_repo
                .set_followup_status(
                    &self.church_id,
                    &visitor.id,
                    FollowupStatus::InProgress,
                    self.clock.now_ms(),
                )
                .await?;

            let Some(url) = whatsapp_link(visitor) else {
                warn!("Visitor has no phone number, skipping WhatsApp");
                return Ok(FollowupOutcome::MissingPhone);
            };

            self.link_opener
                .open(&url)
                .await
                .map_err(|e| FollowupError::LinkOpen(e.to_string()))?;

            info!("Follow-up started");
            Ok(FollowupOutcome::LinkOpened { url })
        }
        .instrument(span)
        .await
    }
}
