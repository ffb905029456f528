use thiserror::Error;

use crate::core::services::ServiceError;

/// Error type that captures storage and collection failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
