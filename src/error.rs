//! Error types for request construction.

/// Errors that can occur while building a signed gateway request
#[derive(Debug, thiserror::Error)]
pub enum PesapalError {
    #[error("Option {key} not found in {allowed:?}")]
    InvalidOption { key: String, allowed: Vec<String> },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Parameter {0} appears more than once in the URL query")]
    DuplicateParameter(String),

    #[error("Signature error: {0}")]
    Signature(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PesapalError {
    /// The offending key for `InvalidOption`, if any
    pub fn option_key(&self) -> Option<&str> {
        match self {
            PesapalError::InvalidOption { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PesapalError>;
