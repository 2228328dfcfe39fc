pub mod dto;
pub mod error;
pub mod visitors;

pub use error::map_err;
