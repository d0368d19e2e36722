/// Startup and runtime failures of the process itself.
///
/// Per-request failures are `SpeechError`s and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lambda runtime error: {0}")]
    Runtime(String),

    #[error("HTTP server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
