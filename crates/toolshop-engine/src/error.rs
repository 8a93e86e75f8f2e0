use std::fmt;
use toolshop_types::{EntityId, EntityKind};

/// Result type for toolshop-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Edited record no longer exists (strict update-miss policy only)
    NotFound { kind: EntityKind, id: EntityId },

    /// Staged form value could not be applied
    Form(toolshop_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { kind, id } => write!(f, "No {} with id {}", kind.singular(), id),
            Error::Form(err) => write!(f, "Form error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound { .. } => None,
            Error::Form(err) => Some(err),
        }
    }
}

impl From<toolshop_types::Error> for Error {
    fn from(err: toolshop_types::Error) -> Self {
        Error::Form(err)
    }
}
