#![allow(clippy::unwrap_used)]

use super::*;

const PRODUCTS: HeaderRule = HeaderRule {
    all_of: &[&["CODIGO"], &["DESCRIPCION", "DESC"]],
    fallback_row: 6,
};

const CLIENTS: HeaderRule = HeaderRule {
    all_of: &[&["NIT"]],
    fallback_row: 0,
};

#[test]
fn test_rule_requires_every_group() {
    assert!(PRODUCTS.matches("CODIGO,DESCRIPCION,PRECIO"));
    assert!(PRODUCTS.matches("codigo,desc. producto"));
    assert!(!PRODUCTS.matches("CODIGO,PRECIO"));
    assert!(!PRODUCTS.matches("REF,DESCRIPCION"));
}

#[test]
fn test_rule_folds_accents() {
    assert!(PRODUCTS.matches("Código,Descripción"));
}

#[test]
fn test_header_found_at_third_line() {
    let lines = vec![
        "INFORME DE INVENTARIO",
        "Fecha: 2024-03-01",
        "ESTADO,SEC,CODIGO,DESCRIPCION,PRECIO",
        "A,1,A1,Pastilla,45000",
    ];
    assert_eq!(locate_header(&lines, &PRODUCTS), 2);
}

#[test]
fn test_first_matching_line_wins() {
    let lines = vec!["NIT,NOMBRE", "NIT,NOMBRE"];
    assert_eq!(locate_header(&lines, &CLIENTS), 0);
}

#[test]
fn test_fallback_when_absent() {
    let lines = vec!["SKU,NAME,PRICE", "A1,Brake Pad,45000"];
    assert_eq!(locate_header(&lines, &PRODUCTS), 6);
    assert_eq!(locate_header(&lines, &CLIENTS), 0);
}

#[test]
fn test_scan_window_is_ten_lines() {
    let mut lines = vec!["metadata"; 10];
    lines.push("NIT,NOMBRE");
    assert_eq!(locate_header(&lines, &CLIENTS), 0);

    let mut lines = vec!["metadata"; 9];
    lines.push("NIT,NOMBRE");
    assert_eq!(locate_header(&lines, &CLIENTS), 9);
}

#[test]
fn test_empty_input_uses_fallback() {
    assert_eq!(locate_header(&[], &PRODUCTS), 6);
}
