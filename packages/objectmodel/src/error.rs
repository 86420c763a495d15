//! Error types for the object model.
//!
//! Only structural failures are errors: an element whose own JSON is not an
//! object, a card that is not a card at all, or input that is not JSON.
//! Everything below that level is reported as a [`Warning`](crate::warning::Warning)
//! and the parse continues.

use thiserror::Error;

/// Main error type for the object model library.
#[derive(Debug, Error)]
pub enum CardError {
    /// The JSON for an element, action or card is structurally unusable.
    #[error("Malformed {element_type}: {reason}")]
    MalformedCard {
        element_type: String,
        reason: String,
    },

    /// Card payload exceeds the configured size limit.
    #[error("Card payload is {size} bytes, exceeding the maximum of {max} bytes")]
    CardTooLarge { size: usize, max: usize },

    /// JSON parsing failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

impl CardError {
    /// Build a [`CardError::MalformedCard`] for the given type name.
    pub fn malformed(element_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedCard {
            element_type: element_type.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for object model operations.
pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = CardError::malformed("FactSet", "expected a JSON object, got null");
        assert_eq!(
            err.to_string(),
            "Malformed FactSet: expected a JSON object, got null"
        );
    }

    #[test]
    fn test_too_large_display() {
        let err = CardError::CardTooLarge { size: 10, max: 5 };
        assert!(err.to_string().contains("10 bytes"));
        assert!(err.to_string().contains("5 bytes"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CardError = json_err.into();
        assert!(err.to_string().starts_with("JSON parsing failed"));
    }
}
