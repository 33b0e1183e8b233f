//! Error handling.
//!
//! This module provides the error types for the operational side of the crate:
//! - **Initialization**: logger setup
//! - **Input**: reading domains from a file or stdin, writing reports
//!
//! A domain that fails to parse is the normal, user-facing path and is never
//! represented here.

mod types;

// Re-export public API
pub use types::{InitializationError, InputError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_read_error_message_includes_path() {
        let err = InputError::FileReadError {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_output_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: InputError = io.into();
        assert!(matches!(err, InputError::OutputError(_)));
        assert!(err.to_string().starts_with("Failed to write report"));
    }
}
