use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown queue: {0}")]
    UnknownQueue(String),
}
