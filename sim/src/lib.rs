// In-memory rpcd API simulator

pub mod fixture;
pub mod routes;
pub mod state;

pub use fixture::{Catalog, FixtureError};
pub use routes::build_router;
pub use state::{RunningCommand, SimError, SimState};

use std::path::PathBuf;
use tokio::net::TcpListener;

/// Serve the simulator on an already bound listener until the task is
/// dropped.
pub async fn serve(listener: TcpListener, state: SimState, static_dir: Option<PathBuf>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("rpcd simulator listening on {}", addr);
    }
    axum::serve(listener, build_router(state, static_dir)).await
}
