//! Error types shared by the generator, the session and the configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PasswordError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PasswordError::InvalidArgument(msg.into())
    }
}
