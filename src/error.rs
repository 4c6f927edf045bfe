use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    /// Local draft validation failure. The message is shown to the user
    /// verbatim, inline in the form, and never reaches the network.
    #[error("{0}")]
    InvalidInput(String),

    /// The remote service rejected a request (non-2xx). Carries the
    /// server-provided `message` when present, else a generic HTTP message.
    #[error("{0}")]
    ApiError(String),

    #[error("Not logged in. Log in first to access the dashboard.")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type TicketResult<T> = Result<T, TicketError>;

impl TicketError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        TicketError::InvalidInput(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        TicketError::ApiError(msg.into())
    }
}
