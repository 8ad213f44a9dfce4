//! Loading records from a two-column CSV file.
//!
//! Format: `tag,url` per line, no header row, lines starting with `#` are
//! comments. A single malformed row fails the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::source::record::Record;

const COLUMNS: [&str; 2] = ["tag", "url"];

/// Error type for source loading.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to open source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: missing '{column}' column")]
    MissingColumn { line: u64, column: &'static str },

    #[error("line {line}: expected {} columns, found {found}", COLUMNS.len())]
    ExtraColumns { line: u64, found: usize },

    #[error("line {line}: '{column}' must not be empty")]
    EmptyField { line: u64, column: &'static str },
}

/// Lazy iterator over the records of a source table.
pub struct RecordReader<R> {
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        let records = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b',')
            .comment(Some(b'#'))
            .flexible(true)
            .from_reader(reader)
            .into_records();

        Self { records }
    }
}

impl RecordReader<File> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.records.next()?;
        Some(row.map_err(SourceError::from).and_then(|row| parse_row(&row)))
    }
}

fn parse_row(row: &csv::StringRecord) -> Result<Record, SourceError> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();

    if row.len() > COLUMNS.len() {
        return Err(SourceError::ExtraColumns {
            line,
            found: row.len(),
        });
    }

    let mut fields = [""; 2];
    for (i, &column) in COLUMNS.iter().enumerate() {
        let value = row
            .get(i)
            .ok_or(SourceError::MissingColumn { line, column })?
            .trim();
        if value.is_empty() {
            return Err(SourceError::EmptyField { line, column });
        }
        fields[i] = value;
    }

    Ok(Record::new(fields[0], fields[1]))
}

/// Read every record from `path`, failing on the first malformed row.
pub fn load_records(path: &Path) -> Result<Vec<Record>, SourceError> {
    let records = RecordReader::open(path)?.collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(path = %path.display(), count = records.len(), "Source loaded");
    Ok(records)
}
