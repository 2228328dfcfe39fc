//! # Application Dependencies
//!
//! Dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;
use ec_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Storage dependencies
    pub visitor_repo: Arc<dyn VisitorRepositoryPort>,
    pub settings: Arc<dyn SettingsPort>,

    // UI dependencies
    pub notifier: Arc<dyn NotificationPort>,
    pub link_opener: Arc<dyn LinkOpenerPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
