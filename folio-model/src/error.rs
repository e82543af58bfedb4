use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    EmptyIdentifier(&'static str),
    InvalidSection { id: String, reason: &'static str },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyIdentifier(kind) => {
                write!(f, "empty {kind} identifier")
            }
            ModelError::InvalidSection { id, reason } => {
                write!(f, "invalid section '{id}': {reason}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
