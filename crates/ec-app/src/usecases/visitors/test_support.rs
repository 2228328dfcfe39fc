//! Mocks and fixtures shared by the visitor use case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use ec_core::ports::{ClockPort, LinkOpenerPort, NotificationPort, VisitorRepositoryError, VisitorRepositoryPort};
use ec_core::{ChurchId, FollowupStatus, Visitor, VisitorId};
use mockall::mock;

mock! {
    pub VisitorRepo {}

    #[async_trait]
    impl VisitorRepositoryPort for VisitorRepo {
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

        async fn save(
            &self,
            church_id: &ChurchId,
            visitor: &Visitor,
        ) -> Result<(), VisitorRepositoryError>;

        async fn set_archived(
            &self,
            church_id: &ChurchId,
            id: &VisitorId,
            archived: bool,
            updated_at_ms: i64,
        ) -> Result<(), VisitorRepositoryError>;

        async fn set_followup_status(
            &self,
            church_id: &ChurchId,
            id: &VisitorId,
            status: FollowupStatus,
            updated_at_ms: i64,
        ) -> Result<(), VisitorRepositoryError>;
    }
}

mock! {
    pub LinkOpener {}

    #[async_trait]
    impl LinkOpenerPort for LinkOpener {
        async fn open(&self, url: &str) -> anyhow::Result<()>;
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Records every notification so tests can assert on them.
#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
    pub successes: Mutex<Vec<String>>,
}

impl NotificationPort for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

pub fn church() -> ChurchId {
    ChurchId::from("central")
}

pub fn visitor(name: &str) -> Visitor {
    Visitor {
        id: VisitorId::from(name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        visit_date: "2025-03-09".to_string(),
        followup_status: FollowupStatus::Pending,
        phone: None,
        email: None,
        notes: None,
        is_member: false,
        archived: false,
        created_at_ms: 0,
        updated_at_ms: 0,
    }
}
