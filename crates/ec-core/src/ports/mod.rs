//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, so the core stays independent of the
//! backend, the UI toolkit and the operating system.

mod clock;
pub mod errors;
pub mod link_opener;
pub mod notification;
pub mod settings;
pub mod visitor_repository;

pub use clock::*;
pub use errors::VisitorRepositoryError;
pub use link_opener::LinkOpenerPort;
pub use notification::NotificationPort;
pub use settings::SettingsPort;
pub use visitor_repository::VisitorRepositoryPort;
