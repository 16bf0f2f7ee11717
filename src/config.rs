//! Server configuration from command-line flags and environment

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::deal_store::DealStore;
use crate::error::DealResult;

/// Deal Flow Server - Query and aggregate space-industry deals over HTTP
#[derive(Parser, Debug, Clone)]
#[command(name = "deal-server")]
#[command(about = "Serve filterable deal flow and statistics as JSON", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// JSONL file replacing the bundled deal table
    #[arg(long, env = "DEAL_DATA_PATH", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Host name or IP address to bind
    #[arg(long, env = "DEAL_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "DEAL_SERVER_PORT", default_value_t = 3030)]
    pub port: u16,

    /// Upper bound on the `limit` query parameter
    #[arg(long, env = "DEAL_MAX_PAGE_SIZE", default_value_t = 100)]
    pub max_page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data: None,
            host: "127.0.0.1".to_string(),
            port: 3030,
            max_page_size: 100,
        }
    }
}

impl ServerConfig {
    /// Host and port to bind; host names are resolved when binding
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Data path resolved against the current directory when relative
    pub fn resolved_data_path(&self) -> Option<PathBuf> {
        self.data.as_ref().map(|path| {
            if Path::new(path).is_absolute() {
                path.clone()
            } else {
                let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                current_dir.join(path)
            }
        })
    }

    /// Load the configured snapshot, or the bundled table when none is set
    pub fn load_store(&self) -> DealResult<DealStore> {
        match self.resolved_data_path() {
            Some(path) => DealStore::from_file(path),
            None => DealStore::bundled(),
        }
    }
}
