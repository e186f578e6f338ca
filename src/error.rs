//! Error types for activation-portal

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Covers both non-2xx backend responses and transport failures.
    #[error("Activation failed: {0}")]
    ActivationFailed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn activation_failed(msg: impl Into<String>) -> Self {
        Error::ActivationFailed(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
