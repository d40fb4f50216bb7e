//! MonkeySee backend entrypoint
//!
//! Starts the prediction API server. The database URL comes from the
//! `--database-url` flag, the DATABASE_URL environment variable (also
//! loaded from `.env`), or a local SQLite file, in that order.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use monkeysee_server::ServerConfig;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "monkeysee",
    version,
    about = "Backend service that powers the MonkeySee prediction playground"
)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// SQLite connection string (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    let bind_addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .context("invalid bind address")?;

    let mut config = ServerConfig::default();
    config.bind_addr = bind_addr;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    monkeysee_server::run_server(config).await
}
