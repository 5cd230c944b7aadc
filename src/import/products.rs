use std::path::Path;

use crate::config::{PRODUCT_HEADER_FALLBACK_ROW, PRODUCT_MIN_COLUMNS};
use crate::models::{Product, RecordKind};

use super::columns::{cell, find_column_index, raw_cell};
use super::header::HeaderRule;
use super::ingest::{parse_file, RecordSchema, RowOutcome};
use super::normalize::{normalize_discount, normalize_price};

const STATUS: &[&str] = &["ESTADO", "STATUS", "EST"];
const SEQUENCE: &[&str] = &["SEC", "SECUENCIA", "CONSECUTIVO", "ITEM"];
const CODE: &[&str] = &["CODIGO", "CODE", "COD", "SKU"];
const DESCRIPTION: &[&str] = &["DESCRIPCION", "DESCRIPTION", "NOMBRE", "DESC"];
const WAREHOUSE: &[&str] = &["BODEGA", "ALMACEN", "WAREHOUSE"];
const REFERENCE: &[&str] = &["REFERENCIA", "REFERENCE", "REF"];
const ORIGIN: &[&str] = &["ORIGEN", "ORIGIN", "PROCEDENCIA"];
const VEHICLE: &[&str] = &["VEHICULO", "VEHICLE", "APLICACION", "MODELO"];
const BRAND: &[&str] = &["MARCA", "BRAND", "FABRICANTE"];
const DISCOUNT: &[&str] = &["DESCUENTO", "DSCTO", "DCTO", "DTO"];
const PRICE: &[&str] = &["PRECIO", "PRICE", "VLR", "VALOR", "ANTES IVA"];

/// Inventory export: `CODIGO` plus a description column marks the header.
pub struct Products;

#[derive(Debug, Clone, Default)]
pub struct ProductColumns {
    pub status: Option<usize>,
    pub sequence: Option<usize>,
    pub code: Option<usize>,
    pub description: Option<usize>,
    pub warehouse: Option<usize>,
    pub reference: Option<usize>,
    pub origin: Option<usize>,
    pub vehicle: Option<usize>,
    pub brand: Option<usize>,
    pub discount: Option<usize>,
    pub price: Option<usize>,
}

impl RecordSchema for Products {
    type Record = Product;
    type Columns = ProductColumns;

    const KIND: RecordKind = RecordKind::Products;
    const HEADER: HeaderRule = HeaderRule {
        all_of: &[&["CODIGO"], &["DESCRIPCION", "DESC"]],
        fallback_row: PRODUCT_HEADER_FALLBACK_ROW,
    };
    const MIN_COLUMNS: usize = PRODUCT_MIN_COLUMNS;

    fn resolve_columns(headers: &[String]) -> ProductColumns {
        ProductColumns {
            status: find_column_index(headers, STATUS),
            sequence: find_column_index(headers, SEQUENCE),
            code: find_column_index(headers, CODE),
            description: find_column_index(headers, DESCRIPTION),
            warehouse: find_column_index(headers, WAREHOUSE),
            reference: find_column_index(headers, REFERENCE),
            origin: find_column_index(headers, ORIGIN),
            vehicle: find_column_index(headers, VEHICLE),
            brand: find_column_index(headers, BRAND),
            discount: find_column_index(headers, DISCOUNT),
            price: find_column_index(headers, PRICE),
        }
    }

    fn build_record(row: &[String], cols: &ProductColumns) -> RowOutcome<Product> {
        let Some(code) = cell(row, cols.code) else {
            return RowOutcome::MissingKey;
        };
        let description =
            cell(row, cols.description).unwrap_or_else(|| Product::default_description(&code));

        RowOutcome::Record(Product {
            status: cell(row, cols.status),
            sequence: cell(row, cols.sequence),
            description,
            warehouse: cell(row, cols.warehouse),
            reference: cell(row, cols.reference),
            origin: cell(row, cols.origin),
            vehicle: cell(row, cols.vehicle),
            brand: cell(row, cols.brand),
            discount: normalize_discount(raw_cell(row, cols.discount)),
            price: normalize_price(raw_cell(row, cols.price)),
            code,
        })
    }
}

/// Products in file order. Any failure to read the file yields an empty list.
pub fn parse_products(path: &Path) -> Vec<Product> {
    parse_file::<Products>(path)
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
