//! Listing server CLI
//!
//! Run with: `cargo run -- --help`

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, FromArgMatches};
use listview::{
    config_file::load_and_merge_config,
    telemetry::{init_logging, TelemetryConfig},
    ListviewServer, ServerConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ServerConfig::command().get_matches();
    let mut config = ServerConfig::from_arg_matches(&matches)?;

    // File values only fill what CLI/env left at defaults
    if let Err(e) = load_and_merge_config(&mut config, &matches) {
        eprintln!("Warning: {e}");
    }
    config.validate().map_err(|e| anyhow!(e))?;

    let telemetry_config = TelemetryConfig::with_server_config(&config);
    init_logging(&telemetry_config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.listen_addr,
        dataset_size = config.dataset_size,
        value_prefix = %config.value_prefix,
        default_page_size = config.default_page_size,
        cors = config.cors_enabled,
        body_limit = config.body_limit,
        log_format = ?telemetry_config.log_format,
        "Starting listview server"
    );

    let addr = config.listen_addr;
    let server = ListviewServer::new(config);
    server
        .run()
        .await
        .with_context(|| format!("server failed on {addr}"))
}
