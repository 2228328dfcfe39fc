//! # Dependency Injection
//!
//! Builds the infrastructure adapters and hands them to the application
//! layer as `Arc<dyn Port>`. This is the only place that names concrete
//! implementations.

use std::path::Path;
use std::sync::Arc;

use ec_app::AppDeps;
use ec_core::config::AppConfig;
use ec_core::ports::{
    ClockPort, LinkOpenerPort, NotificationPort, SettingsPort, VisitorRepositoryPort,
};
use ec_infra::db::mappers::visitor_mapper::VisitorRowMapper;
use ec_infra::db::pool::{init_db_pool, DbPool};
use ec_infra::db::repositories::DieselVisitorRepository;
use ec_infra::db::DieselSqliteExecutor;
use ec_infra::settings::FileSettingsRepository;
use ec_infra::SystemClock;
use tracing::info;

use crate::adapters::{ConsoleLinkOpener, ConsoleNotifier};

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Create the database pool and run migrations.
///
/// # Errors
///
/// Returns `WiringError::DatabaseInit` if the parent directory cannot be
/// created, the path is not valid UTF-8, or the pool or a migration fails.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {}", e)))
}

/// Wire every port from the resolved configuration.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let db_pool = create_db_pool(&config.database_path)?;
    info!(path = %config.database_path.display(), "Database ready");

    let visitor_repo: Arc<dyn VisitorRepositoryPort> = Arc::new(DieselVisitorRepository::new(
        DieselSqliteExecutor::new(db_pool),
        VisitorRowMapper,
    ));
    let settings: Arc<dyn SettingsPort> =
        Arc::new(FileSettingsRepository::new(config.settings_path.clone()));
    let notifier: Arc<dyn NotificationPort> = Arc::new(ConsoleNotifier);
    let link_opener: Arc<dyn LinkOpenerPort> = Arc::new(ConsoleLinkOpener);
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    Ok(AppDeps {
        visitor_repo,
        settings,
        notifier,
        link_opener,
        clock,
    })
}
