use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Mock-authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials: email and password are required")]
    InvalidCredentials,

    #[error("Invalid registration: name, email and password are required")]
    InvalidRegistration,

    #[error("Attempt {attempt} was superseded by a newer login or registration")]
    Superseded { attempt: u64 },
}

/// Chart registry errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Unknown data type: {name}")]
    UnknownDataType { name: String },
}

/// Persisted-mirror errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Result type alias for chart registry operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Result type alias for persisted-mirror operations
pub type StoreResult<T> = Result<T, StoreError>;
