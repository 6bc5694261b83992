//! The PO/POT entry writer.
//!
//! [`PoWriter`] owns its output sink from construction until [`PoWriter::close`].
//! The header is written while constructing the writer, so even a writer that
//! never receives an entry produces a file gettext tools accept.
//!
//! ```rust
//! use pocodec::{PoWriter, ResourceItem, WriterOptions, traits::ResourceWriter};
//!
//! let mut writer = PoWriter::new(Vec::new(), WriterOptions::new(), None)?;
//! writer.add_entry(ResourceItem::new("Greeting", "Hello").into())?;
//! let bytes = writer.close()?;
//! assert!(String::from_utf8(bytes)?.contains("msgid \"Greeting\"\r\nmsgstr \"Hello\"\r\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{debug, trace};

use crate::{
    error::Error,
    escape::{escape, escape_comment},
    header::{HeaderInfo, LINE_ENDING, write_header},
    options::{CommentPolicy, WriterOptions},
    traits::ResourceWriter,
    types::{Item, ResourceItem, TranslationFlags},
};

/// Label of the extracted comment that carries the untranslated value.
pub const ORIGINAL_MESSAGE_PREFIX: &str = "#. Original message: ";

/// Writes resource items as gettext PO entries.
pub struct PoWriter<W: Write> {
    sink: W,
    options: WriterOptions,
    header_info: HeaderInfo,
    source_file: Option<String>,
    header_written: bool,
    /// Writes every `msgstr` as `""`, producing a template (POT) file.
    blank_values: bool,
}

impl PoWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path` and writes a PO header to it.
    pub fn create<P: AsRef<Path>>(
        path: P,
        options: WriterOptions,
        source_file: Option<String>,
    ) -> Result<Self, Error> {
        let file = File::create(path)?;
        PoWriter::new(BufWriter::new(file), options, source_file)
    }
}

impl<W: Write> PoWriter<W> {
    /// Binds a PO writer to `sink` and writes the header.
    pub fn new(sink: W, options: WriterOptions, source_file: Option<String>) -> Result<Self, Error> {
        PoWriter::with_header_info(sink, options, source_file, HeaderInfo::current(), false)
    }

    /// Like [`PoWriter::new`], but every value is written blank.
    pub fn template(
        sink: W,
        options: WriterOptions,
        source_file: Option<String>,
    ) -> Result<Self, Error> {
        PoWriter::with_header_info(sink, options, source_file, HeaderInfo::current(), true)
    }

    /// Fully explicit constructor; `header_info` replaces the current user and clock.
    pub fn with_header_info(
        sink: W,
        options: WriterOptions,
        source_file: Option<String>,
        header_info: HeaderInfo,
        blank_values: bool,
    ) -> Result<Self, Error> {
        let mut writer = PoWriter {
            sink,
            options,
            header_info,
            source_file,
            header_written: false,
            blank_values,
        };
        writer.ensure_header()?;
        Ok(writer)
    }

    /// Name of the file the resources were read from, if any.
    pub fn source_file(&self) -> Option<&str> {
        self.source_file.as_deref()
    }

    /// Rebinds the source file name.
    ///
    /// The header is already written at this point, so this only changes the
    /// fallback `#:` reference of later entries.
    pub fn set_source_file(&mut self, source_file: Option<String>) {
        self.source_file = source_file;
    }

    /// Options this writer was created with.
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Whether every `msgstr` is written blank (POT output).
    pub fn writes_blank_values(&self) -> bool {
        self.blank_values
    }

    /// Flushes the sink and hands it back.
    pub fn close(mut self) -> Result<W, Error> {
        self.sink.flush()?;
        debug!(source_file = ?self.source_file, "closed PO writer");
        Ok(self.sink)
    }

    fn ensure_header(&mut self) -> Result<(), Error> {
        if self.header_written {
            return Ok(());
        }
        self.header_written = true;
        write_header(&mut self.sink, self.source_file.as_deref(), &self.header_info)?;
        debug!(source_file = ?self.source_file, "wrote PO header");
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(LINE_ENDING.as_bytes())?;
        Ok(())
    }

    fn write_derived_comments(&mut self, item: &ResourceItem) -> Result<(), Error> {
        let metadata = &item.metadata;
        let mut original_message = metadata.original_value.clone().unwrap_or_default();
        let mut source_reference = metadata.original_source.clone().unwrap_or_default();

        match self.options.comment_policy {
            CommentPolicy::Full => {
                if original_message.is_empty() {
                    original_message = item.value.clone();
                }
                if source_reference.is_empty() {
                    source_reference = self.source_file.clone().unwrap_or_default();
                }
                if metadata.original_source_line > 0 {
                    if !source_reference.is_empty() {
                        source_reference.push_str(", ");
                    }
                    source_reference.push_str(&format!("line {}", metadata.original_source_line));
                }
            }
            // Only comments that came with the source; the original message is
            // not generated here but an explicit one is still kept.
            CommentPolicy::SourceOnly => source_reference.clear(),
            CommentPolicy::None => return Ok(()),
        }

        if let Some(comment) = metadata.comment.as_deref().filter(|c| !c.is_empty()) {
            self.write_line(&format!("#. {}", escape_comment(comment, Some('.'), 0)))?;
            if !original_message.is_empty() {
                self.write_line("#. ")?;
            }
        }

        if !original_message.is_empty() {
            let message = escape_comment(&original_message, Some('.'), 4);
            if original_message.contains('\n') {
                self.write_line(&format!("{}\n#.    {}", ORIGINAL_MESSAGE_PREFIX, message))?;
            } else {
                self.write_line(&format!("{}{}", ORIGINAL_MESSAGE_PREFIX, message))?;
            }
        }

        if !source_reference.is_empty() {
            self.write_line(&format!("#: {}", escape_comment(&source_reference, Some('.'), 0)))?;
        }

        if self.options.format_flags && metadata.flags.contains(TranslationFlags::CSHARP_FORMAT) {
            self.write_line("#, csharp-format")?;
        }
        Ok(())
    }
}

impl<W: Write> ResourceWriter for PoWriter<W> {
    fn add_entry(&mut self, item: Item) -> Result<(), Error> {
        // Construction already wrote the header.
        self.ensure_header()?;

        if self.options.comment_policy != CommentPolicy::None {
            match &item {
                Item::Po(po) => self.sink.write_all(po.raw_comments.as_bytes())?,
                Item::Resource(resource) => self.write_derived_comments(resource)?,
            }
        }

        let value = if self.blank_values {
            String::new()
        } else {
            escape(item.value())
        };

        if let Some(msgctxt) = self.options.effective_msgctxt().map(escape) {
            self.write_line(&format!("msgctxt \"{}\"", msgctxt))?;
        }
        self.write_line(&format!("msgid \"{}\"", escape(item.name())))?;
        self.write_line(&format!("msgstr \"{}\"", value))?;
        self.write_line("")?;

        trace!(name = item.name(), "wrote PO entry");
        Ok(())
    }
}
