use pocodec::traits::{Parser, ResourceWriter};
use pocodec::{
    CommentPolicy, HeaderInfo, PoItem, PoWriter, ResourceItem, TranslationFlags, WriterOptions,
    convert, read_items, write_items,
};
use std::fs;
use tempfile::tempdir;
use time::macros::datetime;

fn fixed_header() -> HeaderInfo {
    HeaderInfo {
        translator: Some(r"WORKGROUP\translator".to_string()),
        revision_date: datetime!(2026-03-04 05:06 +01:00),
    }
}

fn render(options: WriterOptions, source_file: Option<&str>, items: Vec<pocodec::Item>) -> String {
    let mut writer = PoWriter::with_header_info(
        Vec::new(),
        options,
        source_file.map(str::to_string),
        fixed_header(),
        false,
    )
    .unwrap();
    writer.add_all(items).unwrap();
    String::from_utf8(writer.close().unwrap()).unwrap()
}

/// Splits the output into its blank-line separated blocks, header first.
fn blocks(output: &str) -> Vec<&str> {
    output
        .split("\r\n\r\n")
        .filter(|block| !block.is_empty())
        .collect()
}

#[test]
fn test_complete_file_layout() {
    let output = render(
        WriterOptions::new(),
        Some("Strings.de-DE.resx"),
        vec![
            ResourceItem::new("Greeting", "Hallo").into(),
            ResourceItem::new("Files", "{0} Dateien")
                .with_comment("Count of files")
                .with_original_value("{0} files")
                .with_original_source("Main.cs", 10)
                .with_flags(TranslationFlags::CSHARP_FORMAT)
                .into(),
        ],
    );

    let expected = [
        "# This file was generated by pocodec 0.1.0",
        "#",
        "# Converted to PO from:",
        "#   Strings.de-DE.resx",
        "#",
        "#, fuzzy",
        "msgid \"\"",
        "msgstr \"\"",
        "\"MIME-Version: 1.0\\n\"",
        "\"Content-Type: text/plain; charset=UTF-8\\n\"",
        "\"Content-Transfer-Encoding: 8bit\\n\"",
        "\"X-Generator: pocodec 0.1.0\\n\"",
        "\"Project-Id-Version: PACKAGE VERSION\\n\"",
        "\"PO-Revision-Date: 2026-03-04 05:06+0100\\n\"",
        "\"Last-Translator: translator <EMAIL@ADDRESS>\\n\"",
        "\"Language: de-DE\\n\"",
        "\"Language-Team: English\\n\"",
        "\"Report-Msgid-Bugs-To: \\n\"",
        "\"Plural-Forms: nplurals=2; plural=(n != 1);\\n\"",
        "",
        "#. Original message: Hallo",
        "#: Strings.de-DE.resx",
        "msgid \"Greeting\"",
        "msgstr \"Hallo\"",
        "",
        "#. Count of files",
        "#. ",
        "#. Original message: {0} files",
        "#: Main.cs, line 10",
        "#, csharp-format",
        "msgid \"Files\"",
        "msgstr \"{0} Dateien\"",
        "",
        "",
    ]
    .join("\r\n");
    assert_eq!(output, expected);
}

#[test]
fn test_output_has_no_bom() {
    let output = render(WriterOptions::new(), None, Vec::new());
    assert!(!output.starts_with('\u{feff}'));
    assert!(output.starts_with("# This file was generated by"));
}

#[test]
fn test_zero_entries_still_has_header() {
    let output = render(WriterOptions::new(), None, Vec::new());
    let blocks = blocks(&output);
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("#, fuzzy\r\nmsgid \"\"\r\nmsgstr \"\""));
}

#[test]
fn test_no_comment_lines_with_none_policy() {
    let output = render(
        WriterOptions::new().with_comment_policy(CommentPolicy::None),
        Some("Strings.resx"),
        vec![
            ResourceItem::new("a", "1")
                .with_comment("note")
                .with_original_source("A.cs", 1)
                .with_flags(TranslationFlags::CSHARP_FORMAT)
                .into(),
            PoItem::new("b", "2", "# translator\n#: B.cs:2\n").into(),
        ],
    );
    for block in blocks(&output).iter().skip(1) {
        assert!(block.lines().all(|line| !line.starts_with('#')), "{block:?}");
    }
}

#[test]
fn test_no_references_with_source_only_policy() {
    let output = render(
        WriterOptions::new().with_comment_policy(CommentPolicy::SourceOnly),
        Some("Strings.resx"),
        vec![
            ResourceItem::new("a", "1").with_original_source("A.cs", 12).into(),
            ResourceItem::new("b", "2").with_comment("kept").into(),
        ],
    );
    let entries = blocks(&output)[1..].join("\r\n");
    assert!(!entries.contains("#:"));
    assert!(!entries.contains("Original message"));
    assert!(entries.contains("#. kept\r\n"));
}

#[test]
fn test_po_item_comments_come_first() {
    for policy in [CommentPolicy::Full, CommentPolicy::SourceOnly] {
        let output = render(
            WriterOptions::new().with_comment_policy(policy),
            Some("Strings.resx"),
            vec![PoItem::new("Greeting", "Hallo", "#. note\n").into()],
        );
        let entry = blocks(&output)[1];
        assert_eq!(entry, "#. note\nmsgid \"Greeting\"\r\nmsgstr \"Hallo\"");
    }
}

#[test]
fn test_convert_csv_to_po() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Strings.fr-FR.csv");
    let output = dir.path().join("Strings.fr-FR.po");
    fs::write(&input, "hello,Bonjour,Start page\nbye,\"Au revoir\nà bientôt\"\n").unwrap();

    convert(&input, &output, WriterOptions::new()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("#   Strings.fr-FR.csv\r\n"));
    assert!(content.contains("\"Language: en-US\\n\"\r\n"));
    assert!(content.contains(
        "#. Start page\r\n#. \r\n#. Original message: Bonjour\r\n#: Strings.fr-FR.csv\r\nmsgid \"hello\"\r\nmsgstr \"Bonjour\"\r\n"
    ));
    assert!(content.contains("msgid \"bye\"\r\nmsgstr \"\"\r\n\"Au revoir\"\r\n\"à bientôt\"\r\n"));
}

#[test]
fn test_convert_json_to_pot() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Strings.json");
    let output = dir.path().join("messages.pot");
    let items = vec![
        ResourceItem::new("title", "Welcome").with_original_source("Home.cs", 3),
        ResourceItem::new("count", "{0} items").with_flags(TranslationFlags::CSHARP_FORMAT),
    ];
    items.write_to(&input).unwrap();

    convert(&input, &output, WriterOptions::new()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("#: Home.cs, line 3\r\nmsgid \"title\"\r\nmsgstr \"\"\r\n"));
    assert!(content.contains("#, csharp-format\r\nmsgid \"count\"\r\nmsgstr \"\"\r\n"));
    assert!(!content.contains("msgstr \"Welcome\""));
}

#[test]
fn test_read_items_skips_bom() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bom.csv");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"key,value\n");
    fs::write(&input, bytes).unwrap();

    let items = read_items(&input).unwrap();
    assert_eq!(items, vec![ResourceItem::new("key", "value")]);
}

#[test]
fn test_write_items_with_msgctxt() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("ctx.po");
    let options = WriterOptions::new()
        .with_comment_policy(CommentPolicy::None)
        .with_msgctxt(Some("Dialog".to_string()));

    write_items(vec![ResourceItem::new("ok", "OK")], &output, options, None).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.ends_with("msgctxt \"Dialog\"\r\nmsgid \"ok\"\r\nmsgstr \"OK\"\r\n\r\n"));
}
