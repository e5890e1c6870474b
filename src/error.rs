use thiserror::Error;

/// Errors that can occur while generating and delivering a nutrition plan
#[derive(Error, Debug)]
pub enum AlertError {
    /// The language model could not produce a plan
    #[error("Plan generation failed: {0}")]
    Generation(String),

    /// Provider setup failed (unknown, disabled or missing credentials)
    #[error("Provider error: {0}")]
    Provider(String),

    /// A sender or receiver address could not be parsed
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The email message could not be assembled
    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP relay rejected the message or could not be reached
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// The daily send time is not a valid `HH:MM` value
    #[error("Invalid send time '{0}', expected HH:MM")]
    InvalidSendTime(String),

    /// Registering the OS scheduled task failed
    #[error("Task registration failed: {0}")]
    TaskRegistration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Filesystem or process error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
