//! Validation error types

use std::fmt;

/// Validation error for request bodies and domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing, not a string, or blank after trimming
    Required { field: &'static str },

    /// Request body is not a JSON object
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::InvalidBody { reason } => write!(f, "invalid JSON body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_message_matches_client_contract() {
        let err = ValidationError::Required { field: "text" };
        assert_eq!(err.to_string(), "text is required");
    }
}
