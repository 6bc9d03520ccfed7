use thiserror::Error;

/// Failures inside the directory core.
///
/// Public operations catch these at their boundary, log them and return a
/// safe default; they only surface from the `try_*` helpers and loaders.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    #[error("corrupt stored value: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors raised by a [`crate::store::Store`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store poisoned")]
    Poisoned,
}
