use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use dap_ingest::export::export_to_csv;
use dap_ingest::import::{
    ingest_bytes, ingest_file, Advisors, AreaEmails, Clients, IngestStats, Products,
    RecordSchema,
};
use dap_ingest::models::{
    cc_recipients, find_advisor, find_client, Advisor, AreaEmail, Client, Product, RecordKind,
};
use dap_ingest::store::{DataStore, OrderCounter};

use super::format::{format_percent, format_price, format_size, truncate};

pub(crate) fn as_cli(args: &[String], store: &DataStore) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    let rest = &args[2..];

    match command.as_str() {
        "products" | "clients" | "advisors" | "areas" => {
            let kind = parse_kind(command)?;
            cli_show(kind, rest, store)
        }
        "import" => cli_import(rest, store),
        "export" => cli_export(rest, store),
        "info" => cli_info(store),
        "client" => cli_client(rest, store),
        "cc" => cli_cc(rest, store),
        "next-order" => cli_next_order(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("dap-ingest {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("dap-ingest: product, client, advisor and area-email spreadsheets");
    println!();
    println!("Usage: dap-ingest <command>");
    println!();
    println!("Commands:");
    println!("  products|clients|advisors|areas [file.csv]");
    println!("                                Parse a file (default: the stored one)");
    println!("    --json                      Print records and ingest stats as JSON");
    println!("  import <kind> <file.csv>      Validate and replace the stored file");
    println!("  export <kind> <out.csv>       Write the normalized stored records");
    println!("  info                          List stored files");
    println!("  client <nit>                  Show a client and its advisor");
    println!("  cc [advisor-email|advisor-id] Addresses to copy on an order email");
    println!("  next-order                    Issue the next order number");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Data directory: $DAP_DATA_DIR or the platform data directory");
}

fn parse_kind(s: &str) -> Result<RecordKind> {
    RecordKind::parse(s).ok_or_else(|| {
        anyhow::anyhow!("Unknown record kind: {s} (expected products, clients, advisors or areas)")
    })
}

fn existing_file(arg: &str) -> Result<PathBuf> {
    let path = PathBuf::from(arg);
    if !path.exists() {
        anyhow::bail!("File not found: {arg}");
    }
    Ok(path)
}

// ── Parsing ──────────────────────────────────────────────────

fn cli_show(kind: RecordKind, args: &[String], store: &DataStore) -> Result<()> {
    let json = args.iter().any(|a| a == "--json");
    let path = match args.iter().find(|a| !a.starts_with('-')) {
        Some(file) => existing_file(file)?,
        None => store.path_for(kind),
    };

    match kind {
        RecordKind::Products => show::<Products>(&path, json, print_products),
        RecordKind::Clients => show::<Clients>(&path, json, print_clients),
        RecordKind::Advisors => show::<Advisors>(&path, json, print_advisors),
        RecordKind::AreaEmails => show::<AreaEmails>(&path, json, print_area_emails),
    }
}

fn show<S>(path: &Path, json: bool, print: fn(&[S::Record])) -> Result<()>
where
    S: RecordSchema,
    S::Record: Serialize,
{
    let ingest = ingest_file::<S>(path)?;
    if json {
        let out = serde_json::json!({
            "records": ingest.records,
            "stats": ingest.stats,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    print(&ingest.records);
    println!();
    print_summary(&ingest.stats, ingest.records.len());
    Ok(())
}

fn print_summary(stats: &IngestStats, records: usize) {
    println!(
        "{records} {} (encoding {}, header line {}, {} short rows, {} without key{})",
        stats.kind,
        stats.encoding,
        stats.header_row + 1,
        stats.skipped_short,
        stats.skipped_missing_key,
        if stats.stopped_at_sentinel {
            ", stopped at sentinel"
        } else {
            ""
        }
    );
}

fn print_products(products: &[Product]) {
    println!(
        "{:<12} {:<36} {:<12} {:>7} {:>14} {:>14}",
        "Code", "Description", "Brand", "Disc.", "Price", "Net"
    );
    println!("{}", "─".repeat(100));
    for p in products {
        println!(
            "{:<12} {:<36} {:<12} {:>7} {:>14} {:>14}",
            truncate(&p.code, 12),
            truncate(&p.description, 36),
            truncate(p.brand.as_deref().unwrap_or(""), 12),
            format_percent(p.discount),
            format_price(p.price),
            format_price(p.net_price()),
        );
    }
}

fn print_clients(clients: &[Client]) {
    println!(
        "{:<14} {:<30} {:<16} {:<8} {:>7}",
        "NIT", "Name", "City", "Advisor", "Disc."
    );
    println!("{}", "─".repeat(79));
    for c in clients {
        println!(
            "{:<14} {:<30} {:<16} {:<8} {:>7}",
            truncate(&c.tax_id, 14),
            truncate(&c.name, 30),
            truncate(c.city.as_deref().unwrap_or(""), 16),
            truncate(c.advisor_id.as_deref().unwrap_or(""), 8),
            format_percent(c.discount),
        );
    }
}

fn print_advisors(advisors: &[Advisor]) {
    println!(
        "{:<8} {:<28} {:<12} {:<30} Cell",
        "ID", "Name", "Zone", "Email"
    );
    println!("{}", "─".repeat(90));
    for a in advisors {
        println!(
            "{:<8} {:<28} {:<12} {:<30} {}",
            truncate(&a.id, 8),
            truncate(&a.name, 28),
            truncate(a.zone.as_deref().unwrap_or(""), 12),
            truncate(a.email.as_deref().unwrap_or(""), 30),
            a.cell_phone.as_deref().unwrap_or(""),
        );
    }
}

fn print_area_emails(areas: &[AreaEmail]) {
    println!("{:<30} Email", "Area");
    println!("{}", "─".repeat(60));
    for a in areas {
        println!("{:<30} {}", truncate(&a.area, 30), a.email);
    }
}

// ── Storage ──────────────────────────────────────────────────

fn cli_import(args: &[String], store: &DataStore) -> Result<()> {
    let [kind, file, ..] = args else {
        anyhow::bail!("Usage: dap-ingest import <kind> <file.csv>");
    };
    let kind = parse_kind(kind)?;
    let path = existing_file(file)?;
    let bytes =
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let (count, stats) = match kind {
        RecordKind::Products => count_records::<Products>(&bytes),
        RecordKind::Clients => count_records::<Clients>(&bytes),
        RecordKind::Advisors => count_records::<Advisors>(&bytes),
        RecordKind::AreaEmails => count_records::<AreaEmails>(&bytes),
    };
    if count == 0 {
        anyhow::bail!(
            "No {kind} found in {} (header line {}); stored file left unchanged",
            path.display(),
            stats.header_row + 1
        );
    }

    store.replace(kind, &bytes)?;
    println!(
        "Imported {count} {kind} ({} rows skipped) into {}",
        stats.skipped(),
        store.path_for(kind).display()
    );
    Ok(())
}

fn count_records<S: RecordSchema>(bytes: &[u8]) -> (usize, IngestStats) {
    let ingest = ingest_bytes::<S>(bytes);
    (ingest.records.len(), ingest.stats)
}

fn cli_export(args: &[String], store: &DataStore) -> Result<()> {
    let [kind, output, ..] = args else {
        anyhow::bail!("Usage: dap-ingest export <kind> <out.csv>");
    };
    let kind = parse_kind(kind)?;
    let source = store.path_for(kind);
    let output = Path::new(output);

    let count = match kind {
        RecordKind::Products => export_to_csv(&ingest_file::<Products>(&source)?.records, output)?,
        RecordKind::Clients => export_to_csv(&ingest_file::<Clients>(&source)?.records, output)?,
        RecordKind::Advisors => export_to_csv(&ingest_file::<Advisors>(&source)?.records, output)?,
        RecordKind::AreaEmails => {
            export_to_csv(&ingest_file::<AreaEmails>(&source)?.records, output)?
        }
    };

    if count == 0 {
        println!("No {kind} to export");
    } else {
        println!("Exported {count} {kind} to {}", output.display());
    }
    Ok(())
}

fn cli_info(store: &DataStore) -> Result<()> {
    println!("Data directory: {}", store.root().display());
    println!();
    println!("{:<10} {:<20} {:>10}  Modified", "Kind", "File", "Size");
    println!("{}", "─".repeat(60));
    for &kind in RecordKind::all() {
        match store.info(kind)? {
            Some(info) => println!(
                "{:<10} {:<20} {:>10}  {}",
                kind.as_str(),
                info.filename,
                format_size(info.size),
                info.modified.format("%Y-%m-%d %H:%M"),
            ),
            None => println!("{:<10} {:<20} {:>10}  -", kind.as_str(), kind.file_name(), "missing"),
        }
    }

    let last_order = OrderCounter::new(store.root()).current()?;
    println!();
    println!("Last order number: {last_order}");
    Ok(())
}

// ── Lookups ──────────────────────────────────────────────────

fn cli_client(args: &[String], store: &DataStore) -> Result<()> {
    let Some(tax_id) = args.first() else {
        anyhow::bail!("Usage: dap-ingest client <nit>");
    };
    let clients = ingest_file::<Clients>(&store.path_for(RecordKind::Clients))?.records;
    let client = find_client(&clients, tax_id)
        .ok_or_else(|| anyhow::anyhow!("Client '{tax_id}' not found"))?;
    let advisors = dap_ingest::parse_advisors(&store.path_for(RecordKind::Advisors));

    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());
    println!("NIT:            {}", client.tax_id);
    println!("Name:           {}", client.name);
    println!("Establishment:  {}", field(&client.establishment));
    println!("Address:        {}", field(&client.address));
    println!("City:           {}", field(&client.city));
    println!("Phone:          {}", field(&client.phone));
    println!("Email:          {}", field(&client.email));
    println!("Discount:       {}", format_percent(client.discount));
    match (client.advisor(&advisors), &client.advisor_id) {
        (Some(a), _) => println!(
            "Advisor:        {} ({}) {}",
            a.name,
            a.id,
            a.email.as_deref().unwrap_or("")
        ),
        (None, Some(id)) => println!("Advisor:        {id} (not in advisor list)"),
        (None, None) => println!("Advisor:        -"),
    }
    Ok(())
}

fn cli_cc(args: &[String], store: &DataStore) -> Result<()> {
    let areas = ingest_file::<AreaEmails>(&store.path_for(RecordKind::AreaEmails))?.records;

    let advisor_email = match args.first() {
        Some(arg) if arg.contains('@') => Some(arg.clone()),
        Some(id) => {
            let advisors = ingest_file::<Advisors>(&store.path_for(RecordKind::Advisors))?.records;
            let advisor = find_advisor(&advisors, id)
                .ok_or_else(|| anyhow::anyhow!("Advisor '{id}' not found"))?;
            if advisor.email.is_none() {
                eprintln!("Warning: advisor {} has no email", advisor.id);
            }
            advisor.email.clone()
        }
        None => None,
    };

    for email in cc_recipients(&areas, advisor_email.as_deref()) {
        println!("{email}");
    }
    Ok(())
}

fn cli_next_order(store: &DataStore) -> Result<()> {
    let order = OrderCounter::new(store.root()).next()?;
    println!("{order}");
    Ok(())
}
