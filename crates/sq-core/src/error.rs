use thiserror::Error;

/// Errors that can occur while driving a sequence widget
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A position outside `[0, last_index]` was requested. Only reachable
    /// through a caller bug; the controller never produces one itself.
    #[error("position {index} out of range (last index: {last_index})")]
    OutOfRange { index: usize, last_index: usize },

    #[error("sequence has no navigable pages")]
    NoPages,

    #[error("invalid widget attributes: {0}")]
    InvalidAttributes(String),
}

impl From<serde_json::Error> for NavigationError {
    fn from(error: serde_json::Error) -> Self {
        NavigationError::InvalidAttributes(error.to_string())
    }
}
