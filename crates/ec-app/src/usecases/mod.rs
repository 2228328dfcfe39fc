//! Business logic use cases
//!
//! ```text
//! VisitorRepositoryPort
//!         ↓
//! ListVisitors ──→ VisitorListSession → UI list (search / status / pages)
//!         ↓
//! UpsertVisitor / SetVisitorArchived   → form and drawer actions
//! StartFollowup / FinishFollowup       → follow-up workflow
//! ```

pub mod get_settings;
pub mod visitors;

pub use get_settings::GetSettings;
pub use visitors::{
    FinishFollowup, FollowupError, FollowupOutcome, ListVisitors, SessionEvent, SessionOptions,
    SetVisitorArchived, StartFollowup, UpsertVisitor, UpsertVisitorError, VisitorListSession,
};
