use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorListSettings {
    /// Rows per page on visitor lists. 0 is treated as 1.
    pub items_per_page: usize,

    /// Quiet period before a typed search is committed.
    pub search_debounce_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub visitors: VisitorListSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
