use anyhow::Result;
use ec_core::ChurchId;
use tracing::info;

use crate::bootstrap::config::resolve_config;
use crate::bootstrap::runtime::AppRuntime;
use crate::bootstrap::tracing::init_tracing_subscriber;
use crate::bootstrap::wiring::wire_dependencies;
use crate::cli::{self, Cli};

/// Config, logging, wiring, then the requested command.
pub async fn run_cli(args: Cli) -> Result<()> {
    let config = resolve_config(args.config)?;
    init_tracing_subscriber(&config.log_dir)?;

    info!(
        church_id = %config.church_id,
        database = %config.database_path.display(),
        "Starting ecclesia"
    );

    let deps = wire_dependencies(&config)?;
    let runtime = AppRuntime::new(deps, ChurchId::from(config.church_id.as_str()));

    cli::execute(&runtime, args.command).await
}
