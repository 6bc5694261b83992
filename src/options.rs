//! Options controlling how [`crate::PoWriter`] renders entries.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which comments are written in front of each entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentPolicy {
    /// Comments from the source plus generated ones (original message, file reference).
    #[default]
    Full,

    /// Only comments that existed in the source; nothing generated.
    SourceOnly,

    /// No comments at all.
    None,
}

impl FromStr for CommentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "full" => Ok(CommentPolicy::Full),
            "source_only" | "source" => Ok(CommentPolicy::SourceOnly),
            "none" => Ok(CommentPolicy::None),
            _ => Err(format!("Unknown comment policy: {}", s)),
        }
    }
}

impl Display for CommentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommentPolicy::Full => "full",
            CommentPolicy::SourceOnly => "source_only",
            CommentPolicy::None => "none",
        };
        write!(f, "{}", name)
    }
}

/// Write behavior options for [`crate::PoWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WriterOptions {
    pub comment_policy: CommentPolicy,
    /// Emits `#, csharp-format` for items flagged as format strings.
    pub format_flags: bool,
    /// Context written as `msgctxt` on every entry, ignored when blank.
    pub msgctxt: Option<String>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            comment_policy: CommentPolicy::Full,
            format_flags: true,
            msgctxt: None,
        }
    }
}

impl WriterOptions {
    /// Creates default writer options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment policy.
    pub fn with_comment_policy(mut self, comment_policy: CommentPolicy) -> Self {
        self.comment_policy = comment_policy;
        self
    }

    /// Enables/disables the `#, csharp-format` flag line.
    pub fn with_format_flags(mut self, format_flags: bool) -> Self {
        self.format_flags = format_flags;
        self
    }

    /// Sets the message context.
    pub fn with_msgctxt(mut self, msgctxt: Option<String>) -> Self {
        self.msgctxt = msgctxt;
        self
    }

    /// The message context, if it holds anything but whitespace.
    pub(crate) fn effective_msgctxt(&self) -> Option<&str> {
        self.msgctxt
            .as_deref()
            .filter(|ctxt| !ctxt.trim().is_empty())
    }
}
