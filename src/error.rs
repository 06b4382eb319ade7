//! Error types for taskdeck.

use thiserror::Error;

/// Errors that can occur in taskdeck.
#[derive(Error, Debug)]
pub enum TaskdeckError {
    /// Configuration or environment error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User-supplied input could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization or parsing error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TaskdeckError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskdeckError::NotFound("task 42".to_string());
        assert_eq!(err.to_string(), "Not found: task 42");

        let err = TaskdeckError::Database("locked".to_string());
        assert_eq!(err.to_string(), "Database error: locked");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TaskdeckError = json_err.into();
        assert!(matches!(err, TaskdeckError::Parse(_)));
    }
}
