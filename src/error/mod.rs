use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning a raw payload into a stored thought
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThoughtError {
    #[error("Invalid input: expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Invalid {field}: field is required")]
    MissingField { field: &'static str },

    #[error("Invalid {field}: must be {expected}, got {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid {field}: must be at least {minimum}, got {actual}")]
    BelowMinimum {
        field: &'static str,
        minimum: u64,
        actual: i64,
    },

    #[error("Invalid JSON body: {message}")]
    MalformedBody { message: String },

    #[error("Unexpected failure: {message}")]
    Unexpected { message: String },
}

impl From<serde_json::Error> for ThoughtError {
    fn from(err: serde_json::Error) -> Self {
        ThoughtError::Unexpected {
            message: err.to_string(),
        }
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for thought validation and processing
pub type ThoughtResult<T> = Result<T, ThoughtError>;
