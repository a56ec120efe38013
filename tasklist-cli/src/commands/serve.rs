//! HTTP server command
//!
//! Runs the item API, optionally serving the browser client as well.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tasklist_server::store::config::DEFAULT_DATA_FILE;
use tasklist_server::{run_server, ServerConfig, StoreConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON file holding the task list (created on first write)
    #[arg(long, env = "TASKLIST_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Directory with the browser client, served at /
    #[arg(long, env = "TASKLIST_PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,

    /// Run one mutation at a time instead of letting the last save win
    #[arg(long)]
    pub serialize_writes: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    pub fn server_config(self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
            store: StoreConfig::with_path(self.data_file),
            public_dir: self.public_dir,
            serialize_writes: self.serialize_writes,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    tracing::info!("Starting tasklist server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}
