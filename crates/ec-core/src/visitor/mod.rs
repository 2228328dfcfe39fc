//! Visitor domain: records, follow-up workflow and the list projection that
//! visitor screens render from.
//!
//! ```text
//! VisitorRepositoryPort::list_by_archived
//!         ↓
//!   search::SearchQuery   (committed, debounced text)
//!         ↓
//!   StatusFilter
//!         ↓
//!   collation::compare_names (stable)
//!         ↓
//!   Pagination → VisitorPage
//! ```

pub mod collation;
pub mod filter;
pub mod followup;
pub mod model;
pub mod pagination;
pub mod projection;
pub mod search;
pub mod validation;

pub use filter::{ListFilter, StatusFilter};
pub use model::{FollowupStatus, ParseFollowupStatusError, Visitor, VisitorDraft};
pub use pagination::Pagination;
pub use projection::{count_matching, filter_and_sort, project, VisitorPage};
pub use search::SearchQuery;
pub use validation::VisitorValidationError;
