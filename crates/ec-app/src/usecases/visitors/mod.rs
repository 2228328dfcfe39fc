//! Visitor use cases and the list session.

pub mod debounce;
pub mod finish_followup;
pub mod list_session;
pub mod list_visitors;
pub mod set_visitor_archived;
pub mod start_followup;
pub mod upsert_visitor;

#[cfg(test)]
pub(crate) mod test_support;

pub use debounce::Debouncer;
pub use finish_followup::FinishFollowup;
pub use list_session::{SessionEvent, SessionOptions, VisitorListSession};
pub use list_visitors::ListVisitors;
pub use set_visitor_archived::SetVisitorArchived;
pub use start_followup::{FollowupError, FollowupOutcome, StartFollowup};
pub use upsert_visitor::{UpsertVisitor, UpsertVisitorError};
