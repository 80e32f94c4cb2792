//! Generic CSV table reading with header aliases and per-row validation

use std::io::Read;

use crate::error::{Result, WaypathError};
use crate::load::{LoadOptions, SkippedRecord};

/// A logical column and the header spellings accepted for it
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// An empty cell in a required column makes the row malformed
    pub required: bool,
}

impl Column {
    fn matches(&self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        header == self.name.to_lowercase() || self.aliases.iter().any(|a| *a == header)
    }
}

/// Rows that parsed, plus the rows that were skipped
#[derive(Debug, Clone)]
pub struct Table<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
}

/// Read a CSV table whose first row is a header.
///
/// `parse` receives the row's values in `columns` order and returns the reason
/// when the row is malformed. Malformed or undecodable rows are skipped, or
/// abort the read when `opts.strict` is set.
pub fn read_table<R, T, F>(
    reader: R,
    source_name: &str,
    columns: &[Column],
    opts: &LoadOptions,
    parse: F,
) -> Result<Table<T>>
where
    R: Read,
    F: Fn(&[&str]) -> std::result::Result<T, String>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut indices = Vec::with_capacity(columns.len());
    for column in columns {
        let index = headers
            .iter()
            .position(|h| column.matches(h))
            .ok_or_else(|| {
                WaypathError::malformed(
                    source_name,
                    1,
                    format!("missing column '{}'", column.name),
                )
            })?;
        indices.push(index);
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for row in csv_reader.records() {
        let (line, outcome) = match row {
            Ok(row) => {
                let line = row.position().map(|p| p.line()).unwrap_or(0);
                (line, parse_row(&row, &indices, columns, &parse))
            }
            Err(err) => {
                let (line, reason) = unreadable_row(err)?;
                (line, Err(reason))
            }
        };

        match outcome {
            Ok(record) => records.push(record),
            Err(reason) => {
                if opts.strict {
                    return Err(WaypathError::malformed(source_name, line, reason));
                }
                tracing::warn!(source = source_name, line, reason = %reason, "skipping_record");
                skipped.push(SkippedRecord {
                    source_name: source_name.to_string(),
                    line,
                    reason,
                });
            }
        }
    }

    Ok(Table { records, skipped })
}

fn parse_row<T, F>(
    row: &csv::StringRecord,
    indices: &[usize],
    columns: &[Column],
    parse: &F,
) -> std::result::Result<T, String>
where
    F: Fn(&[&str]) -> std::result::Result<T, String>,
{
    let values = indices
        .iter()
        .zip(columns)
        .map(|(&i, column)| match row.get(i).unwrap_or_default() {
            "" if column.required => Err(format!("missing value for '{}'", column.name)),
            value => Ok(value),
        })
        .collect::<std::result::Result<Vec<&str>, String>>()?;

    parse(&values)
}

/// Line and reason for a row the reader could not decode. Errors that are not
/// tied to a single row are returned as-is.
fn unreadable_row(err: csv::Error) -> Result<(u64, String)> {
    let row_error = match err.kind() {
        csv::ErrorKind::Utf8 { pos, err: utf8 } => Some((
            pos.as_ref().map(|p| p.line()).unwrap_or(0),
            format!("invalid UTF-8 in field {}", utf8.field()),
        )),
        csv::ErrorKind::UnequalLengths { pos, .. } => Some((
            pos.as_ref().map(|p| p.line()).unwrap_or(0),
            "unexpected number of fields".to_string(),
        )),
        _ => None,
    };

    row_error.ok_or_else(|| err.into())
}
