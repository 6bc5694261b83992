//! Traits for reading resource items and writing them out.

use std::{
    fs::File,
    io::{BufRead, Cursor, Write},
    path::Path,
};

use crate::{
    error::Error,
    types::{Item, ResourceItem},
};

/// A trait for parsing and writing a list of resources from/to one file.
///
/// # Example
///
/// ```rust,no_run
/// use pocodec::{ResourceItem, traits::Parser};
/// let items = Vec::<ResourceItem>::read_from("strings.json")?;
/// items.write_to("strings_copy.json")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    ///
    /// A leading byte-order mark (UTF-8 or UTF-16) is detected and the content
    /// is decoded to UTF-8 before parsing.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .strip_bom(true)
            .build(file);
        Self::from_reader(std::io::BufReader::new(decoder))
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        self.to_writer(writer)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// A sink that accepts resource items one at a time.
pub trait ResourceWriter {
    /// Encodes one item.
    fn add_entry(&mut self, item: Item) -> Result<(), Error>;

    /// Encodes a name/value pair that carries no metadata.
    fn add_resource(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.add_entry(Item::Resource(ResourceItem::new(name, value)))
    }

    /// Encodes every item of `items`, stopping at the first failure.
    fn add_all<I>(&mut self, items: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        for item in items {
            self.add_entry(item.into())?;
        }
        Ok(())
    }
}
