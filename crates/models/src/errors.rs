use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for ModelError {
    fn from(e: validator::ValidationErrors) -> Self { Self::Validation(e.to_string()) }
}
