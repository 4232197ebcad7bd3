use std::io;

use thiserror::Error;

/// Errors from reading input, loading configuration, or writing output.
///
/// The tagging pass itself cannot fail.
#[derive(Debug, Error)]
pub enum NumtagError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NumtagError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        NumtagError::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_line() {
        let err = NumtagError::parse(7, "expected a tab");
        assert_eq!(err.to_string(), "line 7: expected a tab");
    }

    #[test]
    fn test_io_error_converts() {
        let err: NumtagError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, NumtagError::Io(_)));
    }
}
