//! The metadata pseudo-entry every PO file starts with.
//!
//! gettext tools need this block to learn the charset of the file, so it is
//! written even when the file ends up holding no entries at all.

use std::io::{self, Write};

use time::{OffsetDateTime, macros::format_description};

use crate::{culture::resolve_culture, escape::escape};

/// Line terminator used for every line the writer emits.
pub const LINE_ENDING: &str = "\r\n";

/// Placeholder used when the invoking user cannot be determined.
pub const UNKNOWN_TRANSLATOR: &str = "NAME";

const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");
const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Values of the header that depend on the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Identity of the invoking user, possibly `DOMAIN\user`.
    pub translator: Option<String>,
    pub revision_date: OffsetDateTime,
}

impl HeaderInfo {
    /// Captures the current user and local time.
    pub fn current() -> Self {
        HeaderInfo {
            translator: current_user(),
            revision_date: OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
        }
    }

    /// The translator name with any domain prefix removed.
    ///
    /// An identity that is empty after stripping (`DOMAIN\`) yields
    /// [`UNKNOWN_TRANSLATOR`] rather than an empty name.
    pub fn translator_name(&self) -> &str {
        let identity = match self.translator.as_deref() {
            Some(identity) if !identity.is_empty() => identity,
            _ => return UNKNOWN_TRANSLATOR,
        };
        match identity.rsplit_once('\\') {
            Some((_, user)) if !user.is_empty() => user,
            Some(_) => UNKNOWN_TRANSLATOR,
            None => identity,
        }
    }

    /// `PO-Revision-Date` value in gettext's `YEAR-MO-DA HO:MI+ZONE` form,
    /// e.g. `2026-10-17 14:05+0200`.
    ///
    /// This is hour:minute with a colon-less offset. Writers built on the .NET
    /// pattern `yyyy-MM-dd HH:MMzzzz` put the month after the hour and write
    /// the offset as `+02:00`; this output intentionally differs from theirs.
    pub fn formatted_revision_date(&self) -> io::Result<String> {
        self.revision_date
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute][offset_hour sign:mandatory][offset_minute]"
            ))
            .map_err(io::Error::other)
    }
}

fn current_user() -> Option<String> {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|name| !name.trim().is_empty())
}

fn write_line<W: Write>(sink: &mut W, line: &str) -> io::Result<()> {
    sink.write_all(line.as_bytes())?;
    sink.write_all(LINE_ENDING.as_bytes())
}

/// Writes the generator comment, the `fuzzy` flag and the metadata entry.
pub fn write_header<W: Write>(
    sink: &mut W,
    source_file: Option<&str>,
    info: &HeaderInfo,
) -> io::Result<()> {
    write_line(
        sink,
        &format!("# This file was generated by {} {}", PROGRAM_NAME, PROGRAM_VERSION),
    )?;
    if let Some(source_file) = source_file.filter(|name| !name.is_empty()) {
        write_line(sink, "#")?;
        write_line(sink, "# Converted to PO from:")?;
        write_line(sink, &format!("#   {}", source_file))?;
    }
    write_line(sink, "#")?;
    // Keeps tools from treating the metadata entry as a translatable message.
    write_line(sink, "#, fuzzy")?;
    write_line(sink, "msgid \"\"")?;
    write_line(sink, "msgstr \"\"")?;

    let fields = [
        ("MIME-Version", "1.0".to_string()),
        ("Content-Type", "text/plain; charset=UTF-8".to_string()),
        ("Content-Transfer-Encoding", "8bit".to_string()),
        (
            "X-Generator",
            format!("{} {}", PROGRAM_NAME, PROGRAM_VERSION),
        ),
        ("Project-Id-Version", "PACKAGE VERSION".to_string()),
        ("PO-Revision-Date", info.formatted_revision_date()?),
        (
            "Last-Translator",
            format!("{} <EMAIL@ADDRESS>", escape(info.translator_name())),
        ),
        ("Language", resolve_culture(source_file)),
        ("Language-Team", "English".to_string()),
        ("Report-Msgid-Bugs-To", String::new()),
        ("Plural-Forms", "nplurals=2; plural=(n != 1);".to_string()),
    ];
    for (key, value) in &fields {
        write_line(sink, &format!("\"{}: {}\\n\"", key, value))?;
    }

    write_line(sink, "")
}
