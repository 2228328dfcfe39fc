pub mod db;
pub mod settings;
pub mod time;

pub use time::SystemClock;
