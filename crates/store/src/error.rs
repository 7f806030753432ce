use thiserror::Error;

/// Errors that can occur when interacting with a storage backend.
///
/// A missing record is not an error: lookups return `Ok(None)` and the
/// service layer decides what "not found" means. These variants cover
/// genuine storage faults, which callers must surface, never swallow.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend is (possibly transiently) unreachable.
    #[error("storage backend unavailable: {reason}")]
    Unavailable { reason: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization/deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored record could not be decoded into a domain value.
    #[error("corrupt record in storage: {0}")]
    Corrupt(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
