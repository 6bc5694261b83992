//! Core types for pocodec.
//! Input readers decode into these; the PO writer serializes these.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser};

impl Parser for Vec<ResourceItem> {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer(&mut writer, self).map_err(Error::Parse)
    }
}

/// Bitset of translation hints attached to a resource item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TranslationFlags(u32);

impl TranslationFlags {
    /// No flags set.
    pub const NONE: TranslationFlags = TranslationFlags(0);

    /// The value is a .NET composite format string (`{0}`, `{1:N2}`, ...).
    pub const CSHARP_FORMAT: TranslationFlags = TranslationFlags(1);

    pub const fn from_bits(bits: u32) -> Self {
        TranslationFlags(bits)
    }

    pub const fn contains(self, other: TranslationFlags) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TranslationFlags {
    type Output = TranslationFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        TranslationFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for TranslationFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Translation metadata carried alongside a resource value.
///
/// Every field is optional; the writer has a fallback or omission rule for
/// each of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemMetadata {
    /// The untranslated value this entry was derived from.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub original_value: Option<String>,

    /// Where the value came from (file name, code location, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub original_source: Option<String>,

    /// Line in `original_source`, `0` when unknown.
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(default)]
    pub original_source_line: u32,

    /// Comment for translators.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "no_flags")]
    #[serde(default)]
    pub flags: TranslationFlags,
}

fn is_zero(line: &u32) -> bool {
    *line == 0
}

fn no_flags(flags: &TranslationFlags) -> bool {
    flags.is_empty()
}

/// A single name/value resource with optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceItem {
    /// Resource key, written as `msgid`.
    pub name: String,

    /// Resource value, written as `msgstr`.
    pub value: String,

    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl ResourceItem {
    /// Creates an item without any metadata.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ResourceItem {
            name: name.into(),
            value: value.into(),
            metadata: ItemMetadata::default(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.metadata.comment = Some(comment.into());
        self
    }

    pub fn with_original_value(mut self, original_value: impl Into<String>) -> Self {
        self.metadata.original_value = Some(original_value.into());
        self
    }

    /// Sets the source reference; `line` of `0` means no line number.
    pub fn with_original_source(mut self, source: impl Into<String>, line: u32) -> Self {
        self.metadata.original_source = Some(source.into());
        self.metadata.original_source_line = line;
        self
    }

    pub fn with_flags(mut self, flags: TranslationFlags) -> Self {
        self.metadata.flags |= flags;
        self
    }
}

/// An entry that was read from an existing PO file.
///
/// Its comment block is kept verbatim so that re-writing the file does not
/// disturb translator comments, references or flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PoItem {
    pub name: String,
    pub value: String,

    /// The original comment lines, including their `#` markers and line breaks.
    #[serde(default)]
    pub raw_comments: String,
}

impl PoItem {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        raw_comments: impl Into<String>,
    ) -> Self {
        PoItem {
            name: name.into(),
            value: value.into(),
            raw_comments: raw_comments.into(),
        }
    }
}

/// Anything the PO writer can encode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// A resource whose comments are derived from its metadata.
    Resource(ResourceItem),

    /// An entry from a previous PO file whose comments are preserved as-is.
    Po(PoItem),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Resource(item) => &item.name,
            Item::Po(item) => &item.name,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Item::Resource(item) => &item.value,
            Item::Po(item) => &item.value,
        }
    }
}

impl From<ResourceItem> for Item {
    fn from(item: ResourceItem) -> Self {
        Item::Resource(item)
    }
}

impl From<PoItem> for Item {
    fn from(item: PoItem) -> Self {
        Item::Po(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_contains() {
        let flags = TranslationFlags::NONE | TranslationFlags::CSHARP_FORMAT;
        assert!(flags.contains(TranslationFlags::CSHARP_FORMAT));
        assert!(!TranslationFlags::NONE.contains(TranslationFlags::CSHARP_FORMAT));
        assert!(!flags.contains(TranslationFlags::NONE));
        assert_eq!(TranslationFlags::from_bits(1), TranslationFlags::CSHARP_FORMAT);
    }

    #[test]
    fn test_builder_sets_metadata() {
        let item = ResourceItem::new("Greeting", "Hello")
            .with_comment("Shown on start")
            .with_original_source("Strings.resx", 12)
            .with_flags(TranslationFlags::CSHARP_FORMAT);
        assert_eq!(item.metadata.comment.as_deref(), Some("Shown on start"));
        assert_eq!(item.metadata.original_source.as_deref(), Some("Strings.resx"));
        assert_eq!(item.metadata.original_source_line, 12);
        assert!(item.metadata.flags.contains(TranslationFlags::CSHARP_FORMAT));
        assert!(item.metadata.original_value.is_none());
    }

    #[test]
    fn test_item_accessors() {
        let resource: Item = ResourceItem::new("a", "b").into();
        let po: Item = PoItem::new("c", "d", "#. note\n").into();
        assert_eq!((resource.name(), resource.value()), ("a", "b"));
        assert_eq!((po.name(), po.value()), ("c", "d"));
    }

    #[test]
    fn test_json_items_without_metadata() {
        let json = r#"[{"name": "hello", "value": "Hello"},
            {"name": "bye", "value": "Bye", "metadata": {"comment": "farewell", "flags": 1}}]"#;
        let items = Vec::<ResourceItem>::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].metadata, ItemMetadata::default());
        assert_eq!(items[1].metadata.comment.as_deref(), Some("farewell"));
        assert!(items[1].metadata.flags.contains(TranslationFlags::CSHARP_FORMAT));
    }

    #[test]
    fn test_json_serialization_skips_empty_metadata() {
        let items = vec![ResourceItem::new("k", "v")];
        let mut out = Vec::new();
        items.to_writer(&mut out).unwrap();
        let json = String::from_utf8(out).unwrap();
        assert_eq!(json, r#"[{"name":"k","value":"v","metadata":{}}]"#);
    }
}
