use thiserror::Error;

/// Errors that can occur while loading or validating canvas configuration
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for configuration operations
pub type CanvasResult<T> = Result<T, CanvasError>;
