//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid tool id '{0}', expected domain.name@major")]
    InvalidToolId(String),

    #[error("Action name cannot be empty")]
    EmptyActionName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tool_id_display() {
        let error = DomainError::InvalidToolId("oops".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid tool id 'oops', expected domain.name@major"
        );
    }
}
