use std::path::Path;

use crate::config::{CLIENT_MIN_COLUMNS, DEFAULT_HEADER_FALLBACK_ROW};
use crate::models::{Client, RecordKind};

use super::columns::{cell, find_column_index, raw_cell};
use super::header::HeaderRule;
use super::ingest::{parse_file, RecordSchema, RowOutcome};
use super::normalize::normalize_discount;

const TAX_ID: &[&str] = &["NIT", "CEDULA", "DOCUMENTO", "IDENTIFICACION"];
const NAME: &[&str] = &["NOMBRE", "RAZON SOCIAL", "CLIENTE", "NAME"];
const ESTABLISHMENT: &[&str] = &["ESTABLECIMIENTO", "NEGOCIO", "LOCAL"];
const ADDRESS: &[&str] = &["DIRECCION", "ADDRESS", "DIR"];
const PHONE: &[&str] = &["TELEFONO", "TEL", "CELULAR", "PHONE"];
const DISCOUNT: &[&str] = &["DESCUENTO", "DSCTO", "DCTO", "DTO"];
const CITY: &[&str] = &["CIUDAD", "MUNICIPIO", "CITY"];
const EMAIL: &[&str] = &["CORREO", "EMAIL", "E-MAIL", "MAIL"];
const ADVISOR_ID: &[&str] = &["ASESOR", "ID ASESOR", "COD ASESOR", "VENDEDOR"];

pub struct Clients;

#[derive(Debug, Clone, Default)]
pub struct ClientColumns {
    pub tax_id: Option<usize>,
    pub name: Option<usize>,
    pub establishment: Option<usize>,
    pub address: Option<usize>,
    pub phone: Option<usize>,
    pub discount: Option<usize>,
    pub city: Option<usize>,
    pub email: Option<usize>,
    pub advisor_id: Option<usize>,
}

impl RecordSchema for Clients {
    type Record = Client;
    type Columns = ClientColumns;

    const KIND: RecordKind = RecordKind::Clients;
    const HEADER: HeaderRule = HeaderRule {
        all_of: &[&["NIT"]],
        fallback_row: DEFAULT_HEADER_FALLBACK_ROW,
    };
    const MIN_COLUMNS: usize = CLIENT_MIN_COLUMNS;

    fn resolve_columns(headers: &[String]) -> ClientColumns {
        ClientColumns {
            tax_id: find_column_index(headers, TAX_ID),
            name: find_column_index(headers, NAME),
            establishment: find_column_index(headers, ESTABLISHMENT),
            address: find_column_index(headers, ADDRESS),
            phone: find_column_index(headers, PHONE),
            discount: find_column_index(headers, DISCOUNT),
            city: find_column_index(headers, CITY),
            email: find_column_index(headers, EMAIL),
            advisor_id: find_column_index(headers, ADVISOR_ID),
        }
    }

    fn build_record(row: &[String], cols: &ClientColumns) -> RowOutcome<Client> {
        let Some(tax_id) = cell(row, cols.tax_id) else {
            return RowOutcome::MissingKey;
        };

        RowOutcome::Record(Client {
            name: cell(row, cols.name).unwrap_or_else(|| Client::default_name(&tax_id)),
            establishment: cell(row, cols.establishment),
            address: cell(row, cols.address),
            phone: cell(row, cols.phone),
            discount: normalize_discount(raw_cell(row, cols.discount)),
            city: cell(row, cols.city),
            email: cell(row, cols.email),
            advisor_id: cell(row, cols.advisor_id),
            tax_id,
        })
    }
}

pub fn parse_clients(path: &Path) -> Vec<Client> {
    parse_file::<Clients>(path)
}

#[cfg(test)]
#[path = "clients_tests.rs"]
mod tests;
