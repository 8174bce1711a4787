use thiserror::Error;

/// Caller errors raised by the public store operations.
///
/// Every variant is a misuse of the API, not a transient fault. Each one is
/// raised before the store mutates, so a failed single-item operation leaves
/// the store exactly as it was.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("identifier '{0}' already exists")]
    DuplicateIdentifier(String),
    #[error("identifier '{0}' not found")]
    NotFound(String),
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("identifier must be a non-empty string")]
    InvalidIdentifier,
}
