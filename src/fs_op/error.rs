use thiserror::Error;

/// Errors produced by filesystem operation helpers.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context message.
    #[error("Filesystem operation failed: {0}")]
    Message(String),
}

impl From<String> for FsOpError {
    fn from(s: String) -> Self {
        FsOpError::Message(s)
    }
}
