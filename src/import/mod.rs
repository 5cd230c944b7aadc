mod advisors;
mod area_emails;
mod clients;
mod columns;
mod encoding;
mod header;
mod ingest;
mod normalize;
mod products;
mod tokenize;

pub use advisors::{parse_advisors, AdvisorColumns, Advisors};
pub use area_emails::{parse_area_emails, AreaEmailColumns, AreaEmails};
pub use clients::{parse_clients, ClientColumns, Clients};
pub use columns::{find_column_index, fold_key};
pub use encoding::{decode_best, DecodedText, TextEncoding};
pub use header::{locate_header, HeaderRule};
pub use ingest::{
    ingest_bytes, ingest_file, parse_file, Ingest, IngestStats, RecordSchema, RowOutcome,
};
pub use normalize::{normalize_discount, normalize_price};
pub use products::{parse_products, ProductColumns, Products};
pub use tokenize::{split_csv_line, split_lines};
