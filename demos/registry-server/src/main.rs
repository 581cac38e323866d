//! registry-server — serves the registration API over HTTP.
//!
//! Usage:
//!   registry-server --addr 127.0.0.1:8000

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cc_registry::{RegistrationStore, create_router};

#[derive(Debug, Parser)]
#[command(name = "registry-server", about = "In-memory registration service")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let app = create_router(RegistrationStore::new());
    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("binding {}", args.addr))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
