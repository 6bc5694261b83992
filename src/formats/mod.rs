pub mod csv;

pub use csv::CSVRecord;

use std::path::Path;

use crate::error::Error;

/// File formats resource items can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `name,value[,comment]` rows.
    Csv,
    /// A JSON array of [`crate::ResourceItem`].
    Json,
}

impl InputFormat {
    /// Picks the format from the extension of `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        match path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Ok(InputFormat::Csv),
            Some("json") => Ok(InputFormat::Json),
            extension => Err(Error::UnsupportedFormat(format!(
                "Unsupported file extension: {:?}.",
                extension
            ))),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Csv => write!(f, "CSV"),
            InputFormat::Json => write!(f, "JSON"),
        }
    }
}
