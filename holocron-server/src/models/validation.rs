//! Input rejected before it reaches the store
//!
//! Every variant renders as a 400 `validation_error` body.

use std::fmt;

#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Username or catalog name is blank after trimming
    Empty { field: &'static str },

    /// Name longer than `max` characters
    TooLong { field: &'static str, max: usize },

    /// Non-integer id, or a favorite with zero or two targets
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Favorite kind other than `people` or `planet`
    InvalidVariant { field: &'static str, value: String },

    /// Request body that is not JSON or lacks required fields
    MalformedBody { detail: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} cannot be empty"),
            Self::TooLong { field, max } => {
                write!(f, "{field} is longer than {max} characters")
            }
            Self::InvalidFormat { field, reason } => write!(f, "{field}: {reason}"),
            Self::InvalidVariant { field, value } => {
                write!(f, "unknown {field} '{value}'")
            }
            Self::MalformedBody { detail } => write!(f, "invalid request body: {detail}"),
        }
    }
}

impl std::error::Error for ValidationError {}
