use std::{
    collections::HashMap,
    io::{self, ErrorKind, Read},
};

use csv::ReaderBuilder;

use crate::error::Error;

/// Address to human-readable label lookup, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap(HashMap<String, String>);

impl LabelMap {
    /// Reads `label,address` records without a header row.
    ///
    /// Records with fewer than two fields are skipped and a repeated
    /// address keeps the last label seen. A stray or unbalanced quote
    /// fails the whole file.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<LabelMap, Error> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        check_quoting(&data)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());
        let mut labels = HashMap::new();

        for record in reader.records() {
            let record = record?;
            if let (Some(label), Some(address)) = (record.get(0), record.get(1))
            {
                labels.insert(address.to_owned(), label.to_owned());
            }
        }

        Ok(LabelMap(labels))
    }

    /// Label for `address`, or `""` when the file has none.
    pub fn label(&self, address: &str) -> &str {
        self.0.get(address).map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy)]
enum Field {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

// The csv reader accepts quotes anywhere; reject the same inputs a strict
// RFC 4180 reader would.
fn check_quoting(data: &[u8]) -> Result<(), Error> {
    let mut field = Field::Start;
    let mut line = 1;

    for &byte in data {
        field = match (field, byte) {
            (Field::Start, b'"') => Field::Quoted,
            (Field::Start | Field::Unquoted, b',' | b'\n') => Field::Start,
            (Field::Start | Field::Unquoted, _) if byte != b'"' => {
                Field::Unquoted
            },
            (Field::Unquoted, _) => {
                return Err(malformed(line, "bare \" in non-quoted field"))
            },
            (Field::Quoted, b'"') => Field::QuoteInQuoted,
            (Field::Quoted, _) => Field::Quoted,
            (Field::QuoteInQuoted, b'"') => Field::Quoted,
            (Field::QuoteInQuoted, b',' | b'\n' | b'\r') => Field::Start,
            (Field::QuoteInQuoted, _) => {
                return Err(malformed(
                    line,
                    "extraneous or missing \" in quoted-field",
                ))
            },
            (Field::Start, _) => Field::Unquoted,
        };

        if byte == b'\n' {
            line += 1;
        }
    }

    match field {
        Field::Quoted => Err(malformed(
            line,
            "extraneous or missing \" in quoted-field",
        )),
        _ => Ok(()),
    }
}

fn malformed(line: usize, reason: &str) -> Error {
    Error::Io(io::Error::new(
        ErrorKind::InvalidData,
        format!("line {}: {}", line, reason),
    ))
}

impl FromIterator<(String, String)> for LabelMap {
    /// Collects `(address, label)` pairs.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        LabelMap(iter.into_iter().collect())
    }
}
