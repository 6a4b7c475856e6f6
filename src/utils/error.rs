//! Error handling for the surfaces around the compiler
//!
//! Compilation never fails: malformed texttab constructs degrade to
//! missing styles or dropped lines. This error type exists for the
//! ambient tooling - reading input files and parsing base-style files.

use std::fmt;

/// Error type for the CLI and file-loading helpers.
#[derive(Debug, Clone)]
pub enum TexttabError {
    /// Invalid base-styles file
    InvalidStyles { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for TexttabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TexttabError::InvalidStyles { message } => {
                write!(f, "Invalid styles: {}", message)
            }
            TexttabError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for TexttabError {}

impl From<std::io::Error> for TexttabError {
    fn from(err: std::io::Error) -> Self {
        TexttabError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for the fallible helpers.
pub type TexttabResult<T> = Result<T, TexttabError>;

// Convenience constructors
impl TexttabError {
    pub fn invalid_styles(message: impl Into<String>) -> Self {
        TexttabError::InvalidStyles {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        TexttabError::IoError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_styles_display() {
        let err = TexttabError::invalid_styles("expected an object");
        assert!(err.to_string().contains("Invalid styles"));
        assert!(err.to_string().contains("expected an object"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.tt");
        let err = TexttabError::from(io);
        assert!(err.to_string().contains("missing.tt"));
    }
}
