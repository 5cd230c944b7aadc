mod run;

use anyhow::Result;
use dap_ingest::config::Config;
use dap_ingest::store::DataStore;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env()?;
    init_tracing(&config);

    let store = DataStore::open(&config.data_dir)?;
    run::as_cli(&args, &store)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(dap_ingest::config::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
