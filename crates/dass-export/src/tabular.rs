//! CSV serialization of the results table.
//!
//! Layout: a `Scale,Score,Severity` header and one row per subscale,
//! `\n`-terminated, UTF-8. Labels are the same strings shown on screen so a
//! parsed file compares equal to the displayed rows.

use ::csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::ExportError;
use crate::table::{HEADERS, ResultRow};

pub const CONTENT_TYPE: &str = "text/csv";

/// Serialize result rows to CSV bytes.
pub fn generate_csv(rows: &[ResultRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for row in rows {
        writer.write_record([
            row.scale.to_string(),
            row.score.to_string(),
            row.severity.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Parse CSV bytes produced by [`generate_csv`] back into rows.
pub fn parse_csv(data: &[u8]) -> Result<Vec<ResultRow>, ExportError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(data);

    let headers = reader.headers()?.clone();
    if headers.iter().ne(HEADERS) {
        return Err(ExportError::InvalidRow {
            line: 1,
            reason: format!("unexpected header {:?}", headers.iter().collect::<Vec<_>>()),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(parse_record(&record?)?);
    }
    Ok(rows)
}

fn parse_record(record: &StringRecord) -> Result<ResultRow, ExportError> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let invalid = |reason: String| ExportError::InvalidRow { line, reason };

    let field = |i: usize| record.get(i).unwrap_or_default();

    let scale = field(0).parse().map_err(|e| invalid(format!("{e}")))?;
    let score = field(1)
        .trim()
        .parse()
        .map_err(|e| invalid(format!("bad score '{}': {e}", field(1))))?;
    let severity = field(2).parse().map_err(|e| invalid(format!("{e}")))?;

    Ok(ResultRow {
        scale,
        score,
        severity,
    })
}
