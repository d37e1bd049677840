use crate::shared::{StoreError, ValidationError};
use serde::{Deserialize, Serialize};

pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Error handed to the UI: a stable code plus the message shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new("STORAGE_ERROR", message)
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

impl From<StoreError> for UseCaseError {
    fn from(err: StoreError) -> Self {
        UseCaseError::storage("Saved data could not be read or written").with_details(err.to_string())
    }
}

impl From<ValidationError> for UseCaseError {
    fn from(err: ValidationError) -> Self {
        UseCaseError::validation(err.to_string())
    }
}

impl From<anyhow::Error> for UseCaseError {
    fn from(err: anyhow::Error) -> Self {
        UseCaseError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err: UseCaseError = ValidationError::RequiredFields.into();
        assert!(err.is_validation());
        assert_eq!(err.message, "Please fill in all required fields");
    }

    #[test]
    fn test_store_error_keeps_details() {
        let err: UseCaseError = StoreError::Unavailable.into();
        assert_eq!(err.code, "STORAGE_ERROR");
        assert!(err.details.is_some());
        assert!(err.to_string().starts_with("[STORAGE_ERROR]"));
    }

    #[test]
    fn test_anyhow_is_internal() {
        let err: UseCaseError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "[INTERNAL_ERROR] boom");
    }
}
