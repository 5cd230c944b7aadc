pub mod config;
pub mod export;
pub mod import;
pub mod models;
pub mod store;

pub use import::{parse_advisors, parse_area_emails, parse_clients, parse_products};
