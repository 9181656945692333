//! Error types for humantype

use thiserror::Error;

/// Result type for humantype operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for humantype
#[derive(Debug, Error)]
pub enum Error {
    /// Selected layout is not in the layout table
    #[error("Unknown keyboard layout: '{0}'")]
    UnknownLayout(String),

    /// Layout definition is malformed
    #[error("Invalid keyboard layout '{name}': {reason}")]
    InvalidLayout { name: String, reason: String },

    /// Delay bounds with min > max
    #[error("Invalid {name} range: minimum {min}ms is greater than maximum {max}ms")]
    InvalidDelayRange { name: String, min: u64, max: u64 },

    /// Typo chance outside 0..=100
    #[error("Invalid typo chance: {0}% (expected 0-100)")]
    InvalidTypoChance(u32),

    /// Target element could not be found or focused
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Target surface failed to focus, type or press
    #[error("Surface error in {operation}: {message}")]
    Surface { operation: String, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid layout error
    pub fn invalid_layout(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid delay range error
    pub fn invalid_range(name: impl Into<String>, min: u64, max: u64) -> Self {
        Self::InvalidDelayRange {
            name: name.into(),
            min,
            max,
        }
    }

    /// Create a target surface error
    pub fn surface(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Surface {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Check if this error was raised while building a configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownLayout(_)
                | Error::InvalidLayout { .. }
                | Error::InvalidDelayRange { .. }
                | Error::InvalidTypoChance(_)
        )
    }

    /// Check if this error came from the target surface
    pub fn is_surface(&self) -> bool {
        matches!(self, Error::ElementNotFound(_) | Error::Surface { .. })
    }
}
