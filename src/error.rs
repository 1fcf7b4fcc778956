use thiserror::Error;

/// Failures raised at the persistence boundary. Everything above the store
/// adapter catches these and degrades to a user-visible notification.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
