#![allow(clippy::unwrap_used)]

use super::*;
use crate::import::{ingest_bytes, Clients, Products};
use crate::models::AreaEmail;

#[test]
fn test_export_area_emails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("areas.csv");
    let records = vec![
        AreaEmail {
            area: "BODEGA".into(),
            email: "bodega@dap.co".into(),
        },
        AreaEmail {
            area: "CREDITO, CARTERA".into(),
            email: "credito@dap.co".into(),
        },
    ];
    assert_eq!(export_to_csv(&records, &path).unwrap(), 2);
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "area,email\nBODEGA,bodega@dap.co\n\"CREDITO, CARTERA\",credito@dap.co\n"
    );
}

#[test]
fn test_export_normalized_products() {
    let source = "CODIGO,DESCRIPCION,MARCA,DESCUENTO,PRECIO\nA1,\"Filtro, aceite\",MANN,15,\"$45.000\"\nA2,Bujia,,,\"1.234,56\"\n";
    let products = ingest_bytes::<Products>(source.as_bytes()).records;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.csv");
    assert_eq!(export_to_csv(&products, &path).unwrap(), 2);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "status,sequence,code,description,warehouse,reference,origin,vehicle,brand,discount,price",
            ",,A1,\"Filtro, aceite\",,,,,MANN,15,45000",
            ",,A2,Bujia,,,,,,20,1234.56",
        ]
    );
}

#[test]
fn test_export_empty_clients() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.csv");
    let clients = ingest_bytes::<Clients>(b"NIT,NOMBRE\n").records;
    assert_eq!(export_to_csv(&clients, &path).unwrap(), 0);
    assert!(path.exists());
}

#[test]
fn test_export_bad_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    let records: Vec<AreaEmail> = Vec::new();
    assert!(export_to_csv(&records, &path).is_err());
}
