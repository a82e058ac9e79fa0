use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid content type: {value} {location}")]
    InvalidContentType {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name for validation errors, if known
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidContentType { .. } => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
