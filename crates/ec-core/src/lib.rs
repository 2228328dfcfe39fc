//! # ec-core
//!
//! Core domain models and business logic for Ecclesia.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod ports;
pub mod settings;
pub mod visitor;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{ChurchId, VisitorId};
pub use settings::Settings;
pub use visitor::{
    FollowupStatus, ListFilter, Pagination, StatusFilter, Visitor, VisitorDraft, VisitorPage,
};
