//! Use case for getting application settings

use std::sync::Arc;

use anyhow::Result;
use ec_core::ports::SettingsPort;
use ec_core::settings::Settings;
use tracing::{info, info_span, Instrument};

/// Loads the current application settings from the configured settings
/// repository.
pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// # Returns
    /// - `Ok(Settings)` - The current application settings
    /// - `Err(e)` if loading settings fails
    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let result = self.settings.load().await?;

            info!(
                items_per_page = result.visitors.items_per_page,
                search_debounce_ms = result.visitors.search_debounce_ms,
                "Settings retrieved"
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
