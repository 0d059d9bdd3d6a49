//! Error types for the diff crate.

use jtc_types::TypeError;

/// Errors that can occur while addressing nodes of a document.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The pointer text itself is malformed.
    #[error("{0}")]
    InvalidPointer(#[from] TypeError),

    /// The pointer does not lead to a node of the document.
    #[error("no node at {pointer}")]
    PathNotFound { pointer: String },

    /// The node exists but cannot be expanded or collapsed.
    #[error("node at {pointer} is not an object or array")]
    NotComposite { pointer: String },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
