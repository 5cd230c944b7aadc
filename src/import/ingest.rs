use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, trace, warn};

use crate::models::RecordKind;

use super::encoding::{decode_best, TextEncoding};
use super::header::{locate_header, HeaderRule};
use super::tokenize::{split_csv_line, split_lines};

/// What became of one data row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome<T> {
    Record(T),
    MissingKey,
}

/// Per-record-type knowledge: how to recognize the header, which columns to
/// look for, and how to turn a row into a record.
pub trait RecordSchema {
    type Record;
    type Columns: std::fmt::Debug;

    const KIND: RecordKind;
    const HEADER: HeaderRule;
    const MIN_COLUMNS: usize;

    fn resolve_columns(headers: &[String]) -> Self::Columns;
    fn build_record(row: &[String], columns: &Self::Columns) -> RowOutcome<Self::Record>;

    /// Whether this row ends the usable part of the file. It and every row
    /// after it are dropped. Checked before any other row policy.
    fn ends_input(_row: &[String], _columns: &Self::Columns) -> bool {
        false
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestStats {
    pub kind: RecordKind,
    pub encoding: TextEncoding,
    pub header_row: usize,
    pub data_rows: usize,
    pub skipped_short: usize,
    pub skipped_missing_key: usize,
    pub stopped_at_sentinel: bool,
}

impl IngestStats {
    pub fn skipped(&self) -> usize {
        self.skipped_short + self.skipped_missing_key
    }
}

#[derive(Debug, Clone)]
pub struct Ingest<T> {
    pub records: Vec<T>,
    pub stats: IngestStats,
}

/// Run the whole pipeline over an in-memory file. Never fails: malformed
/// rows are skipped and counted.
pub fn ingest_bytes<S: RecordSchema>(bytes: &[u8]) -> Ingest<S::Record> {
    let decoded = decode_best(bytes);
    debug!(
        kind = %S::KIND,
        encoding = %decoded.encoding,
        replacements = decoded.replacements,
        "decoded input"
    );

    let lines = split_lines(&decoded.text);
    let header_row = locate_header(&lines, &S::HEADER);
    let mut stats = IngestStats {
        kind: S::KIND,
        encoding: decoded.encoding,
        header_row,
        data_rows: 0,
        skipped_short: 0,
        skipped_missing_key: 0,
        stopped_at_sentinel: false,
    };

    let Some(header_line) = lines.get(header_row) else {
        debug!(kind = %S::KIND, header_row, lines = lines.len(), "header row past end of input");
        return Ingest {
            records: Vec::new(),
            stats,
        };
    };

    let headers = split_csv_line(header_line);
    let columns = S::resolve_columns(&headers);
    debug!(kind = %S::KIND, header_row, ?columns, "resolved columns");

    let mut records = Vec::new();
    for (offset, line) in lines[header_row + 1..].iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = header_row + offset + 2;
        stats.data_rows += 1;

        let row = split_csv_line(line);
        if S::ends_input(&row, &columns) {
            debug!(line_no, "sentinel row, ignoring the rest of the file");
            stats.stopped_at_sentinel = true;
            break;
        }
        if row.len() < S::MIN_COLUMNS {
            trace!(line_no, fields = row.len(), "skipping short row");
            stats.skipped_short += 1;
            continue;
        }

        match S::build_record(&row, &columns) {
            RowOutcome::Record(record) => records.push(record),
            RowOutcome::MissingKey => {
                trace!(line_no, "skipping row without key");
                stats.skipped_missing_key += 1;
            }
        }
    }

    debug!(
        kind = %S::KIND,
        records = records.len(),
        skipped = stats.skipped(),
        "ingest finished"
    );
    Ingest { records, stats }
}

/// Read `path` fully and ingest it. Only the read itself can fail.
pub fn ingest_file<S: RecordSchema>(path: &Path) -> Result<Ingest<S::Record>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {} file: {}", S::KIND, path.display()))?;
    Ok(ingest_bytes::<S>(&bytes))
}

/// Like [`ingest_file`], but a read failure is logged and yields no records.
pub fn parse_file<S: RecordSchema>(path: &Path) -> Vec<S::Record> {
    match ingest_file::<S>(path) {
        Ok(ingest) => ingest.records,
        Err(e) => {
            warn!(kind = %S::KIND, error = %format!("{e:#}"), "returning empty list");
            Vec::new()
        }
    }
}
