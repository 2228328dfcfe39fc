use super::model::*;

impl Default for VisitorListSettings {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            search_debounce_ms: 250,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            visitors: VisitorListSettings::default(),
        }
    }
}
