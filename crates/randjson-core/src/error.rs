//! Error types for document generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}
