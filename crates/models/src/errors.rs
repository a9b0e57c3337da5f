use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("empty request body")]
    EmptyBody,
    #[error("decode error: {0}")]
    Decode(String),
}
