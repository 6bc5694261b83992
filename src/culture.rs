//! Culture detection from `.resx`-style file names.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

/// Culture assumed when the file name does not carry one.
pub const DEFAULT_CULTURE: &str = "en-US";

lazy_static! {
    // `Strings.fr-FR.resx` -> `fr-FR`
    static ref CULTURE_IN_FILE_NAME: Regex = Regex::new(r"\.([\w-]+)\.resx").unwrap();
}

/// Returns the culture tag embedded in `file_name`, or [`DEFAULT_CULTURE`].
///
/// Only the last path component is inspected.
pub fn resolve_culture(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).file_name())
        .and_then(|name| name.to_str())
        .and_then(|name| CULTURE_IN_FILE_NAME.captures(name))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| DEFAULT_CULTURE.to_string(), |m| m.as_str().to_string())
}
