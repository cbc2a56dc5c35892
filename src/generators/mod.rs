// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod transform;

pub use password::PasswordGenerator;
pub use transform::{generate, Transformer};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The request itself is unusable, e.g. the text is missing or blank.
    #[error("{0}")]
    Validation(String),

    /// Anything else that went wrong while producing a password.
    #[error("{0}")]
    Unexpected(String),
}

impl GenerationError {
    pub fn text_required() -> Self {
        GenerationError::Validation("Text required".to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
