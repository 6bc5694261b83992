#![forbid(unsafe_code)]
//! Gettext PO/POT writer for localization resources.
//!
//! Resource items (name/value pairs with optional translation metadata) are
//! encoded as `msgid`/`msgstr` entries, preceded by comments derived from
//! their metadata according to a [`CommentPolicy`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pocodec::{CommentPolicy, PoWriter, ResourceItem, WriterOptions, traits::ResourceWriter};
//!
//! // Convert a resource list file straight to PO
//! pocodec::convert("Strings.de.csv", "Strings.de.po", WriterOptions::new())?;
//!
//! // Or drive the writer yourself
//! let options = WriterOptions::new().with_comment_policy(CommentPolicy::SourceOnly);
//! let mut writer = PoWriter::create("messages.po", options, Some("Strings.resx".into()))?;
//! writer.add_entry(ResourceItem::new("Greeting", "Hello").with_comment("Start page").into())?;
//! writer.close()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Output is UTF-8 without a byte-order mark and uses CRLF line endings.

pub mod codec;
pub mod culture;
pub mod error;
pub mod escape;
pub mod formats;
pub mod header;
pub mod options;
pub mod traits;
pub mod types;
pub mod writer;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{convert, read_items, write_items},
    culture::resolve_culture,
    error::Error,
    escape::{escape, escape_comment},
    header::HeaderInfo,
    options::{CommentPolicy, WriterOptions},
    types::{Item, ItemMetadata, PoItem, ResourceItem, TranslationFlags},
    writer::PoWriter,
};
