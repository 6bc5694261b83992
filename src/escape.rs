//! Escaping of string literals and comments for the PO format.

/// Closes the current quoted segment and opens a new one on the next line.
const SEGMENT_BREAK: &str = "\"\r\n\"";

/// Escapes `text` for use between the quotes of a `msgid`/`msgstr` line.
///
/// The result carries no outer quotes. A text containing a newline starts
/// with an empty segment so that every line of the value begins at the same
/// column, and each newline continues the literal on the next physical line.
/// Carriage returns are dropped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);

    if text.contains('\n') {
        out.push_str(SEGMENT_BREAK);
    }

    for ch in text.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\x07' => out.push_str("\\a"),
            '\n' => out.push_str(SEGMENT_BREAK),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Continues a multi-line comment as further comment lines.
///
/// Every newline in `text` is followed by `#`, then `marker` when given
/// (`.` for extracted comments, `:` for references, none for translator
/// comments), then `indent` spaces.
pub fn escape_comment(text: &str, marker: Option<char>, indent: usize) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }

    let mut replacement = String::from("\n#");
    if let Some(marker) = marker {
        replacement.push(marker);
    }
    replacement.push_str(&" ".repeat(indent));

    text.replace('\n', &replacement)
}
