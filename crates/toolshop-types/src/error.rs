use std::fmt;

/// Result type for toolshop-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while staging form values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The form has no field with this name
    UnknownField { kind: &'static str, field: String },

    /// The value could not be parsed for the field
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownField { kind, field } => {
                write!(f, "Unknown {} field: '{}'", kind, field)
            }
            Error::InvalidValue {
                field,
                value,
                reason,
            } => write!(f, "Invalid value '{}' for {}: {}", value, field, reason),
        }
    }
}

impl std::error::Error for Error {}
