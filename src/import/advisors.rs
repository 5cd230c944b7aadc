use std::path::Path;

use crate::config::{ADVISOR_MIN_COLUMNS, DEFAULT_HEADER_FALLBACK_ROW};
use crate::models::{Advisor, RecordKind};

use super::columns::{cell, find_column_index};
use super::header::HeaderRule;
use super::ingest::{parse_file, RecordSchema, RowOutcome};

const ID: &[&str] = &["ID", "CODIGO", "CEDULA", "DOCUMENTO"];
const NAME: &[&str] = &["NOMBRE", "NAME", "ASESOR"];
const ZONE: &[&str] = &["ZONA", "ZONE", "REGION"];
const EMAIL: &[&str] = &["CORREO", "EMAIL", "E-MAIL", "MAIL"];
const CELL_PHONE: &[&str] = &["CELULAR", "CEL", "MOVIL", "TELEFONO"];

pub struct Advisors;

#[derive(Debug, Clone, Default)]
pub struct AdvisorColumns {
    pub id: Option<usize>,
    pub name: Option<usize>,
    pub zone: Option<usize>,
    pub email: Option<usize>,
    pub cell_phone: Option<usize>,
}

impl RecordSchema for Advisors {
    type Record = Advisor;
    type Columns = AdvisorColumns;

    const KIND: RecordKind = RecordKind::Advisors;
    const HEADER: HeaderRule = HeaderRule {
        all_of: &[&["ID"], &["NOMBRE"]],
        fallback_row: DEFAULT_HEADER_FALLBACK_ROW,
    };
    const MIN_COLUMNS: usize = ADVISOR_MIN_COLUMNS;

    fn resolve_columns(headers: &[String]) -> AdvisorColumns {
        AdvisorColumns {
            id: find_column_index(headers, ID),
            name: find_column_index(headers, NAME),
            zone: find_column_index(headers, ZONE),
            email: find_column_index(headers, EMAIL),
            cell_phone: find_column_index(headers, CELL_PHONE),
        }
    }

    fn build_record(row: &[String], cols: &AdvisorColumns) -> RowOutcome<Advisor> {
        let Some(id) = cell(row, cols.id) else {
            return RowOutcome::MissingKey;
        };

        RowOutcome::Record(Advisor {
            name: cell(row, cols.name).unwrap_or_else(|| Advisor::default_name(&id)),
            zone: cell(row, cols.zone),
            email: cell(row, cols.email),
            cell_phone: cell(row, cols.cell_phone),
            id,
        })
    }
}

pub fn parse_advisors(path: &Path) -> Vec<Advisor> {
    parse_file::<Advisors>(path)
}

#[cfg(test)]
#[path = "advisors_tests.rs"]
mod tests;
