use jtc_types::Side;
use thiserror::Error;

/// The banner shown whenever either input fails to decode. It never carries
/// the decoder's detail.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON input. Please check your JSON and try again.";

#[derive(Debug, Error)]
pub enum SessionError {
    /// One of the two inputs is not valid JSON.
    #[error("Invalid JSON input. Please check your JSON and try again.")]
    InvalidJson {
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {0} document; run compare first")]
    NoDocument(Side),

    #[error("{0}")]
    Diff(#[from] jtc_diff::DiffError),

    #[error("config error: {0}")]
    Config(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
