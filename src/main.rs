//! Deal Flow Server - Binary Entry Point
//!
//! Loads the deal snapshot once and serves it over HTTP.

use std::sync::Arc;

use clap::Parser;

use deal_flow::api::{bind, serve, AppState};
use deal_flow::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging();

    let config = ServerConfig::parse();
    log::info!("Deal Flow Server v{}", deal_flow::VERSION);

    let store = Arc::new(config.load_store()?);
    let state = Arc::new(AppState::with_config(store, &config));

    let (host, port) = config.bind_target();
    let listener = bind(host, port).await?;
    serve(state, listener).await?;
    Ok(())
}

/// Initialize logging from RUST_LOG, defaulting to info
fn init_logging() {
    use env_logger::{Builder, Env};
    use std::io::Write;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
