mod defaults;
pub mod model;

pub use model::{Settings, VisitorListSettings, CURRENT_SCHEMA_VERSION};
