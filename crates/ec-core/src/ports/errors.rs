use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisitorRepositoryError {
    #[error("visitor not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}
