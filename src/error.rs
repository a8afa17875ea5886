//! Error types shared by the conversion helpers.

/// Errors returned by the encoding and timestamp helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Encoding error for '{input}': {reason}")]
    Encoding { input: String, reason: String },

    #[error("Type error: '{input}' is not a valid {expected}")]
    Type { input: String, expected: &'static str },
}

impl ConversionError {
    pub fn encoding(input: &str, reason: impl ToString) -> Self {
        Self::Encoding {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn type_mismatch(input: &str, expected: &'static str) -> Self {
        Self::Type {
            input: input.to_string(),
            expected,
        }
    }

    /// True for malformed hex/base64 input
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding { .. })
    }

    /// True when the input was not the expected kind of value
    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
