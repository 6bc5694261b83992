//! All error types for the pocodec crate.
//!
//! Writing a PO file can only fail when the output sink rejects a write; the
//! remaining variants come from the input readers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::WriteZero, "sink closed");
        let error = Error::Io(io_error);
        assert_eq!(error.to_string(), "I/O error: sink closed");
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_unsupported_format_error() {
        let error = Error::UnsupportedFormat("xyz".to_string());
        assert_eq!(error.to_string(), "unsupported format: xyz");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnsupportedFormat("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnsupportedFormat"));
        assert!(debug.contains("test"));
    }
}
