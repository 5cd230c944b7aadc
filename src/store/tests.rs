#![allow(clippy::unwrap_used)]

use super::*;

fn store() -> (tempfile::TempDir, DataStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::open(dir.path()).unwrap();
    (dir, store)
}

// ── DataStore ─────────────────────────────────────────────────

#[test]
fn test_open_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = DataStore::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.root(), nested.as_path());
}

#[test]
fn test_info_missing_file() {
    let (_dir, store) = store();
    assert!(store.info(RecordKind::Products).unwrap().is_none());
}

#[test]
fn test_replace_then_info() {
    let (_dir, store) = store();
    store
        .replace(RecordKind::Clients, b"NIT,NOMBRE\n1,Ana\n")
        .unwrap();
    let info = store.info(RecordKind::Clients).unwrap().unwrap();
    assert_eq!(info.filename, "clientes.csv");
    assert_eq!(info.size, 17);
}

#[test]
fn test_replace_overwrites_whole_file() {
    let (_dir, store) = store();
    store.replace(RecordKind::Advisors, b"ID,NOMBRE\n1,Luis\n2,Ana\n").unwrap();
    store.replace(RecordKind::Advisors, b"ID,NOMBRE\n3,Eva\n").unwrap();
    let content = std::fs::read_to_string(store.path_for(RecordKind::Advisors)).unwrap();
    assert_eq!(content, "ID,NOMBRE\n3,Eva\n");
}

#[test]
fn test_replace_leaves_no_temp_files() {
    let (dir, store) = store();
    store.replace(RecordKind::AreaEmails, b"AREA,MAIL\n").unwrap();
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_replaced_file_parses() {
    let (_dir, store) = store();
    store
        .replace(RecordKind::Advisors, b"ID,NOMBRE\n1,Luis\n")
        .unwrap();
    let advisors = crate::import::parse_advisors(&store.path_for(RecordKind::Advisors));
    assert_eq!(advisors.len(), 1);
}

// ── OrderCounter ──────────────────────────────────────────────

#[test]
fn test_counter_starts_at_zero() {
    let dir = tempfile::tempdir().unwrap();
    let counter = OrderCounter::new(dir.path());
    assert_eq!(counter.current().unwrap(), 0);
}

#[test]
fn test_counter_increments_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let counter = OrderCounter::new(dir.path());
    assert_eq!(counter.next().unwrap(), 1);
    assert_eq!(counter.next().unwrap(), 2);

    let reopened = OrderCounter::new(dir.path());
    assert_eq!(reopened.current().unwrap(), 2);
    assert_eq!(reopened.next().unwrap(), 3);
}

#[test]
fn test_counter_garbage_restarts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("consecutivo.txt"), "abc").unwrap();
    let counter = OrderCounter::new(dir.path());
    assert_eq!(counter.current().unwrap(), 0);
    assert_eq!(counter.next().unwrap(), 1);
}

#[test]
fn test_counter_tolerates_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("consecutivo.txt"), " 41\n").unwrap();
    let counter = OrderCounter::new(dir.path());
    assert_eq!(counter.next().unwrap(), 42);
}
