use thiserror::Error;

/// Error produced by a [`Transport`](crate::transport::Transport) when no response was received.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response. The transport's error is kept as-is.
    #[error(transparent)]
    Transport(TransportError),
    /// The API answered with something other than 200.
    #[error("{status}: {body}")]
    Api { status: u16, body: String },
    /// The body was not the JSON shape we asked for.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    /// The request could not be built from the client settings.
    #[error("invalid request: {0}")]
    Request(String),
}

impl Error {
    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
