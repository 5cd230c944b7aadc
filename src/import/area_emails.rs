use std::path::Path;

use crate::config::{AREA_EMAIL_MIN_COLUMNS, AREA_SENTINEL, DEFAULT_HEADER_FALLBACK_ROW};
use crate::models::{AreaEmail, RecordKind};

use super::columns::{cell, find_column_index};
use super::header::HeaderRule;
use super::ingest::{parse_file, RecordSchema, RowOutcome};

const AREA: &[&str] = &["AREA", "DEPARTAMENTO", "DEPENDENCIA"];
const EMAIL: &[&str] = &["CORREO", "EMAIL", "E-MAIL", "MAIL"];

/// Area routing list. Rows from the sentinel area onward name per-order
/// advisors and are not part of the broadcast list.
pub struct AreaEmails;

#[derive(Debug, Clone, Default)]
pub struct AreaEmailColumns {
    pub area: Option<usize>,
    pub email: Option<usize>,
}

impl RecordSchema for AreaEmails {
    type Record = AreaEmail;
    type Columns = AreaEmailColumns;

    const KIND: RecordKind = RecordKind::AreaEmails;
    const HEADER: HeaderRule = HeaderRule {
        all_of: &[&["AREA"], &["MAIL"]],
        fallback_row: DEFAULT_HEADER_FALLBACK_ROW,
    };
    const MIN_COLUMNS: usize = AREA_EMAIL_MIN_COLUMNS;

    fn resolve_columns(headers: &[String]) -> AreaEmailColumns {
        AreaEmailColumns {
            area: find_column_index(headers, AREA),
            email: find_column_index(headers, EMAIL),
        }
    }

    fn ends_input(row: &[String], cols: &AreaEmailColumns) -> bool {
        cell(row, cols.area).is_some_and(|a| a.to_uppercase() == AREA_SENTINEL)
    }

    fn build_record(row: &[String], cols: &AreaEmailColumns) -> RowOutcome<AreaEmail> {
        let area = cell(row, cols.area)
            .map(|a| a.to_uppercase())
            .unwrap_or_default();
        let Some(email) = cell(row, cols.email) else {
            return RowOutcome::MissingKey;
        };

        RowOutcome::Record(AreaEmail { area, email })
    }
}

pub fn parse_area_emails(path: &Path) -> Vec<AreaEmail> {
    parse_file::<AreaEmails>(path)
}

#[cfg(test)]
#[path = "area_emails_tests.rs"]
mod tests;
