use async_trait::async_trait;

use crate::{
    ids::{ChurchId, VisitorId},
    ports::errors::VisitorRepositoryError,
    visitor::{FollowupStatus, Visitor},
};

/// Record source for visitors. Every call is scoped to one church.
#[async_trait]
pub trait VisitorRepositoryPort: Send + Sync {
    /// Returns one archived partition, most recent visit first.
    async fn list_by_archived(
        &self,
        church_id: &ChurchId,
        archived: bool,
    ) -> Result<Vec<Visitor>, VisitorRepositoryError>;

    async fn find_by_id(
        &self,
        church_id: &ChurchId,
        id: &VisitorId,
    ) -> Result<Option<Visitor>, VisitorRepositoryError>;

    /// Inserts or overwrites the record.
    async fn save(
        &self,
        church_id: &ChurchId,
        visitor: &Visitor,
    ) -> Result<(), VisitorRepositoryError>;

    /// Fails with `NotFound` when no record has that id.
    async fn set_archived(
        &self,
        church_id: &ChurchId,
        id: &VisitorId,
        archived: bool,
        updated_at_ms: i64,
    ) -> Result<(), VisitorRepositoryError>;

    /// Fails with `NotFound` when no record has that id.
    async fn set_followup_status(
        &self,
        church_id: &ChurchId,
        id: &VisitorId,
        status: FollowupStatus,
        updated_at_ms: i64,
    ) -> Result<(), VisitorRepositoryError>;
}
