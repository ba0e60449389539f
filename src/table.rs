//! Delimited table I/O.
//!
//! The whole file is decoded, parsed and held in memory; writing serializes
//! the complete table first and lands it with a single `fs::write`. A run
//! therefore either produces the full augmented table or leaves the file
//! untouched, there is no partial output to corrupt downstream consumers.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::errors::GridcritError;

/// Resolves a WHATWG encoding label ("latin-1", "windows-1252", "utf-8").
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, GridcritError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| GridcritError::UnknownEncoding(label.to_string()))
}

/// Converts a configured delimiter character to the single byte csv expects.
pub fn delimiter_byte(delimiter: char) -> Result<u8, GridcritError> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(GridcritError::InvalidDelimiter(delimiter))
    }
}

/// In-memory delimited table: one header row plus string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Reads and decodes a delimited file.
    pub fn read(
        path: &Path,
        delimiter: u8,
        encoding: &'static Encoding,
    ) -> Result<Self, GridcritError> {
        let bytes = fs::read(path).map_err(|source| GridcritError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let (text, _, _) = encoding.decode(&bytes);
        Self::parse(&text, delimiter)
    }

    /// Parses decoded table text. Short rows are padded so every row has
    /// one cell per header.
    pub fn parse(text: &str, delimiter: u8) -> Result<Self, GridcritError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Serializes, encodes and writes the table in one shot.
    pub fn write(
        &self,
        path: &Path,
        delimiter: u8,
        encoding: &'static Encoding,
    ) -> Result<(), GridcritError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }

        writer.flush().map_err(|source| GridcritError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        let buffer = writer.into_inner().map_err(|e| GridcritError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
        })?;
        // csv always emits UTF-8
        let text = String::from_utf8_lossy(&buffer);
        let (bytes, _, _) = encoding.encode(&text);

        fs::write(path, bytes).map_err(|source| GridcritError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Looks up a column the transform cannot run without.
    pub fn require_column(&self, name: &str) -> Result<usize, GridcritError> {
        self.column_index(name)
            .ok_or_else(|| GridcritError::MissingColumn(name.to_string()))
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }

    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Writes a full column of values. An existing column with this name is
    /// overwritten in place (same position); otherwise the column is
    /// appended on the right. `values` must hold one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_semicolon_delimited_text() {
        let table = Table::parse("a;b;c\n1;2;3\n4;5;6\n", b';').unwrap();
        assert_eq!(table.headers(), ["a", "b", "c"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, 2), "6");
    }

    #[test]
    fn short_rows_are_padded() {
        let table = Table::parse("a;b;c\n1;2\n", b';').unwrap();
        assert_eq!(table.cell(0, 2), "");
    }

    #[test]
    fn missing_column_is_an_error() {
        let table = Table::parse("a;b\n1;2\n", b';').unwrap();
        assert!(table.column_index("a").is_some());
        let err = table.require_column("Einwohner").unwrap_err();
        assert!(matches!(err, GridcritError::MissingColumn(name) if name == "Einwohner"));
    }

    #[test]
    fn set_column_overwrites_in_place() {
        let mut table = Table::parse("a;b;c\n1;2;3\n4;5;6\n", b';').unwrap();
        table.set_column("b", vec!["x".into(), "y".into()]);
        assert_eq!(table.headers(), ["a", "b", "c"]);
        assert_eq!(table.cell(0, 1), "x");
        assert_eq!(table.cell(1, 1), "y");
    }

    #[test]
    fn set_column_appends_new_names() {
        let mut table = Table::parse("a;b\n1;2\n", b';').unwrap();
        table.set_column("II_N", vec!["0.5".into()]);
        assert_eq!(table.headers(), ["a", "b", "II_N"]);
        assert_eq!(table.cell(0, 2), "0.5");
    }

    #[test]
    fn latin1_round_trip_preserves_umlauts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let encoding = resolve_encoding("latin-1").unwrap();

        let text = "Übertragungsleistung Bezug;Einwohner\n90,5;200\n";
        let (bytes, _, _) = encoding.encode(text);
        std::fs::write(&path, bytes).unwrap();

        let table = Table::read(&path, b';', encoding).unwrap();
        assert_eq!(table.headers()[0], "Übertragungsleistung Bezug");

        table.write(&path, b';', encoding).unwrap();
        let reread = Table::read(&path, b';', encoding).unwrap();
        assert_eq!(table, reread);
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let encoding = resolve_encoding("utf-8").unwrap();
        let err = Table::read(Path::new("/nonexistent/table.csv"), b';', encoding).unwrap_err();
        assert!(matches!(err, GridcritError::Read { .. }));
    }

    #[test]
    fn unknown_encoding_label_is_rejected() {
        assert!(resolve_encoding("latin-1").is_ok());
        assert!(resolve_encoding("windows-1252").is_ok());
        assert!(resolve_encoding("utf-8").is_ok());
        assert!(matches!(
            resolve_encoding("klingon-8"),
            Err(GridcritError::UnknownEncoding(_))
        ));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert!(matches!(
            delimiter_byte('ö'),
            Err(GridcritError::InvalidDelimiter('ö'))
        ));
    }
}
