use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the shift engine and its collaborators
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(shiftdesk::config))]
    Config(String),

    #[error("Shift data source error: {0}")]
    #[diagnostic(code(shiftdesk::shift_source))]
    ShiftSource(String),

    #[error("Shift update error: {0}")]
    #[diagnostic(code(shiftdesk::shift_sink))]
    ShiftSink(String),

    #[error("Calendar error: {0}")]
    #[diagnostic(code(shiftdesk::calendar))]
    Calendar(String),

    #[error(transparent)]
    #[diagnostic(code(shiftdesk::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(shiftdesk::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(shiftdesk::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type DeskResult<T> = Result<T, Error>;

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create shift data source errors
pub fn source_error(message: &str) -> Error {
    Error::ShiftSource(message.to_string())
}

/// Helper to create shift update errors
pub fn sink_error(message: &str) -> Error {
    Error::ShiftSink(message.to_string())
}

/// Helper to create calendar errors
pub fn calendar_error(message: &str) -> Error {
    Error::Calendar(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
