use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::import::TextEncoding;

// ── Ingestion heuristics ─────────────────────────────────────

/// How many leading lines are searched for a header row.
pub const HEADER_SCAN_LINES: usize = 10;

/// Header row used for product exports when no header is found.
/// The inventory report puts six lines of metadata above the table.
pub const PRODUCT_HEADER_FALLBACK_ROW: usize = 6;

/// Header row used for every other record type when no header is found.
pub const DEFAULT_HEADER_FALLBACK_ROW: usize = 0;

pub const PRODUCT_MIN_COLUMNS: usize = 3;
pub const CLIENT_MIN_COLUMNS: usize = 2;
pub const ADVISOR_MIN_COLUMNS: usize = 2;
pub const AREA_EMAIL_MIN_COLUMNS: usize = 2;

pub const DEFAULT_DISCOUNT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
pub const DISCOUNT_MIN: Decimal = Decimal::ZERO;
pub const DISCOUNT_MAX: Decimal = Decimal::ONE_HUNDRED;

/// Prices strictly between zero and this value are assumed to have lost
/// their thousands and get multiplied by `PRICE_CORRECTION_FACTOR`.
pub const PRICE_CORRECTION_CEILING: Decimal = Decimal::ONE_HUNDRED;
pub const PRICE_CORRECTION_FACTOR: Decimal = Decimal::ONE_THOUSAND;

/// Decoders tried in order; the first one without replacement characters wins.
pub const ENCODING_CANDIDATES: &[TextEncoding] = &[
    TextEncoding::Utf8,
    TextEncoding::Windows1252,
    TextEncoding::Latin1,
    TextEncoding::Iso8859_1,
];

/// Area label after which the remaining rows belong to per-order advisors.
pub const AREA_SENTINEL: &str = "ASESOR QUE GENERA EL PEDIDO";

// ── Runtime configuration ────────────────────────────────────

pub const DATA_DIR_ENV: &str = "DAP_DATA_DIR";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Resolve configuration from the environment.
    /// `DAP_DATA_DIR` overrides the platform data directory.
    pub fn from_env() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let log_filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            data_dir,
            log_filter,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "dap", "DapIngest")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
