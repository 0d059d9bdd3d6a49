use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid side: {0} (expected left or right)")]
    InvalidSide(String),

    #[error("invalid JSON pointer: {0}")]
    InvalidPointer(String),

    #[error("invalid theme: {0} (expected light or dark)")]
    InvalidTheme(String),

    #[error("invalid color mode: {0} (expected auto, always or never)")]
    InvalidColorMode(String),
}

pub type TypeResult<T> = Result<T, TypeError>;
