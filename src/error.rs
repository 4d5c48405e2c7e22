use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropError {
    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("Duplicate property id: {0}")]
    DuplicateId(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, PropError>;
