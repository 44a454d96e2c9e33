use crate::contact::ContactValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<ContactValidationError> for CoreError {
    fn from(err: ContactValidationError) -> Self {
        CoreError::Validation(err.to_string())
    }
}
