//! Support for CSV resource lists.
//!
//! Each row is `name,value[,comment]` without a header row. An empty comment
//! column is the same as no comment.
use std::io::BufRead;

use crate::{error::Error, traits::Parser, types::ResourceItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSVRecord {
    pub key: String,
    pub value: String,
    pub comment: Option<String>,
}

impl Parser for Vec<CSVRecord> {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = Vec::new();
        for result in rdr.records() {
            let row = result?;
            let Some(key) = row.get(0) else {
                continue;
            };
            records.push(CSVRecord {
                key: key.to_string(),
                value: row.get(1).unwrap_or_default().to_string(),
                comment: row
                    .get(2)
                    .filter(|comment| !comment.is_empty())
                    .map(str::to_string),
            });
        }
        Ok(records)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        for record in self {
            match &record.comment {
                Some(comment) => wtr.write_record([&record.key, &record.value, comment])?,
                None => wtr.write_record([&record.key, &record.value])?,
            }
        }
        wtr.flush()?;
        Ok(())
    }
}

impl From<CSVRecord> for ResourceItem {
    fn from(record: CSVRecord) -> Self {
        let item = ResourceItem::new(record.key, record.value);
        match record.comment {
            Some(comment) => item.with_comment(comment),
            None => item,
        }
    }
}
