//! # Error Types
//!
//! Errors raised while reading numeric data. Only I/O can fail: text that
//! does not look like a number is skipped, never reported.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while reading numeric rows.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The input file could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading a line failed (I/O error or invalid UTF-8).
    #[error("read error on line {line}: {source}")]
    Line {
        /// One-based line number
        line: usize,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for reading operations.
pub type ReadResult<T> = Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display_and_source() {
        let err = ReadError::Line {
            line: 7,
            source: io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReadError>();
    }
}
