// src/table/mod.rs
use csv::{ReaderBuilder, Terminator};
use std::{collections::HashMap, fs, path::Path};
use tracing::debug;

use crate::error::{ReportError, Result};

pub mod utils;
pub mod write;

pub use utils::clean_key;
pub use write::write_table;

/// Field separator of both the input dataset and the reports.
pub const DELIMITER: u8 = b';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names, from the first non-empty line of the file.
    pub headers: Vec<String>,
    /// Every following line, as a Vec of Strings (one per field).
    /// Arity is not checked against `headers`.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Split `rows` into header + records. `source` is only used for the error.
    pub fn from_rows(mut rows: Vec<Vec<String>>, source: &Path) -> Result<Self> {
        if rows.is_empty() {
            return Err(ReportError::EmptyInput(source.to_path_buf()));
        }
        let headers = rows.remove(0);
        Ok(Self { headers, rows })
    }

    pub fn column_index(&self) -> ColumnIndex {
        ColumnIndex::new(&self.headers)
    }
}

/// Read `path`, split on `\n`, drop empty lines and split each line on `;`.
///
/// No quote handling and no trimming: a `\r` before the newline stays part
/// of the last field. The whole file is buffered first, so a missing file and
/// non-UTF-8 content both surface as `ReportError::Io`.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true) // record arity is checked on lookup, not here
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Read a delimited file whose first row is the header.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let rows = read_rows(&path)?;
    let table = RawTable::from_rows(rows, path.as_ref())?;
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded table"
    );
    Ok(table)
}

/// Field name → position, built once per header.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new(headers: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            // first occurrence wins on duplicate names
            positions.entry(name.clone()).or_insert(idx);
        }
        Self { positions }
    }

    pub fn position(&self, name: &str) -> Result<usize> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| ReportError::MissingColumn(name.to_string()))
    }

    /// Number of distinct column names.
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }
}

/// Value at `idx` in `record`, or `ShortRecord` naming the row and column.
pub fn field<'a>(record: &'a [String], idx: usize, row: usize, column: &str) -> Result<&'a str> {
    record
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| ReportError::ShortRecord {
            row,
            column: column.to_string(),
            len: record.len(),
        })
}
