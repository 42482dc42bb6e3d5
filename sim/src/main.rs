// rpcd API simulator
// Run with: cargo run -p sim

use anyhow::Context;
use sim::{Catalog, SimState};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("RPCD_SIM_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let static_dir = std::env::var("RPCD_SIM_STATIC").ok().map(PathBuf::from);

    let catalog = match std::env::var("RPCD_SIM_FIXTURE") {
        Ok(path) => {
            info!("Loading fixture {}", path);
            Catalog::load(&path)?
        }
        Err(_) => {
            info!("No RPCD_SIM_FIXTURE set, using the demo catalog");
            Catalog::demo()?
        }
    };
    info!(
        "{} display(s), {} layout(s), {} command(s)",
        catalog.displays.len(),
        catalog.layout_count(),
        catalog.commands.len()
    );

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    sim::serve(listener, SimState::new(catalog), static_dir).await?;
    Ok(())
}
