use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinWizError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FinWizError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        FinWizError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(field: &str) -> Self {
        FinWizError::invalid(field, "result exceeds the representable decimal range")
    }
}

impl From<serde_json::Error> for FinWizError {
    fn from(e: serde_json::Error) -> Self {
        FinWizError::SerializationError(e.to_string())
    }
}
