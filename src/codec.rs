//! Reading resource lists from disk and writing them out as PO/POT files.
//!
//! The output flavour follows the destination extension: `.pot` produces a
//! template with blank values, anything else a regular PO file.
use std::path::Path;

use tracing::debug;

use crate::{
    error::Error,
    formats::{CSVRecord, InputFormat},
    options::WriterOptions,
    traits::{Parser, ResourceWriter},
    types::{Item, ResourceItem},
    writer::PoWriter,
};

/// Reads all resource items from a CSV or JSON file, chosen by extension.
pub fn read_items<P: AsRef<Path>>(path: P) -> Result<Vec<ResourceItem>, Error> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)?;
    let items = match format {
        InputFormat::Csv => Vec::<CSVRecord>::read_from(path)?
            .into_iter()
            .map(ResourceItem::from)
            .collect(),
        InputFormat::Json => Vec::<ResourceItem>::read_from(path)?,
    };
    debug!(path = %path.display(), %format, count = items.len(), "read resource items");
    Ok(items)
}

/// Returns `true` when `path` names a PO template.
pub fn is_template_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pot"))
}

/// Writes `items` to `path` as a PO file, or a POT file for `.pot` paths.
///
/// # Parameters
/// - `items`: Entries to encode, in output order.
/// - `path`: Destination file; created or truncated.
/// - `options`: Comment policy, flags and message context.
/// - `source_file`: Name recorded in the header and used as fallback reference.
pub fn write_items<I, P>(
    items: I,
    path: P,
    options: WriterOptions,
    source_file: Option<String>,
) -> Result<(), Error>
where
    I: IntoIterator,
    I::Item: Into<Item>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    let mut writer = if is_template_path(path) {
        PoWriter::template(file, options, source_file)?
    } else {
        PoWriter::new(file, options, source_file)?
    };
    writer.add_all(items)?;
    writer.close()?;
    debug!(path = %path.display(), "wrote PO file");
    Ok(())
}

/// Convert a CSV or JSON resource list into a PO (or POT) file.
///
/// The input file name is bound as the source file of the output, so it
/// appears in the header and, with full comments, as each entry's reference.
///
/// # Example
///
/// ```rust,no_run
/// use pocodec::{WriterOptions, convert};
/// convert("Strings.fr-FR.csv", "Strings.fr-FR.po", WriterOptions::new())?;
/// # Ok::<(), pocodec::Error>(())
/// ```
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: WriterOptions,
) -> Result<(), Error> {
    let input = input.as_ref();
    let items = read_items(input)?;
    let source_file = input
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string);
    write_items(items, output, options, source_file)
}
