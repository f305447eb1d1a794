use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown entity kind: {0}")]
    UnknownEntity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
