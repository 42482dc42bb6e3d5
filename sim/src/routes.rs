//! rpcd REST surface over axum.

use crate::state::{SimError, SimState};
use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use rpcd::{Command, DisplayLayouts, StartCommand, Status};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub type SharedState = Arc<RwLock<SimState>>;

impl IntoResponse for SimError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::warn!("Rejected: {}", self);
            (StatusCode::BAD_REQUEST, Json(json!({ "status": self.to_string() }))).into_response()
        } else {
            tracing::warn!("Failed: {}", self);
            (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
        }
    }
}

/// Build the API router. With `static_dir` every other path is served from
/// that directory (the built web app); otherwise it is an unknown endpoint.
pub fn build_router(state: SimState, static_dir: Option<PathBuf>) -> Router {
    let shared: SharedState = Arc::new(RwLock::new(state));

    let api = Router::new()
        .route("/layouts", get(get_layouts))
        .route("/commands", get(get_commands))
        .route("/status", get(get_status))
        .route("/layout/:name", get(apply_layout))
        .route("/layout/:display/:name", get(apply_display_layout))
        .route("/command/:name", post(start_command))
        .route("/stop/:name", get(stop_command))
        .route("/move/:name/:frame", get(move_command))
        .route("/reset", get(reset))
        .with_state(shared);

    let app = match static_dir {
        Some(dir) => {
            tracing::info!("Serving web app from {}", dir.display());
            api.fallback_service(ServeDir::new(dir))
        }
        None => api.fallback(unknown_endpoint),
    };

    // The web app may be served from another origin
    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

fn done() -> Json<Value> {
    Json(json!({}))
}

async fn get_layouts(State(state): State<SharedState>) -> Json<Vec<DisplayLayouts>> {
    Json(state.read().await.catalog().displays.clone())
}

async fn get_commands(State(state): State<SharedState>) -> Json<Vec<Command>> {
    Json(state.read().await.catalog().commands.clone())
}

async fn get_status(State(state): State<SharedState>) -> Json<Status> {
    Json(state.read().await.status())
}

async fn apply_layout(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, SimError> {
    state.write().await.apply_layout(None, &name)?;
    Ok(done())
}

async fn apply_display_layout(
    State(state): State<SharedState>,
    Path((display, name)): Path<(String, String)>,
) -> Result<Json<Value>, SimError> {
    state.write().await.apply_layout(Some(&display), &name)?;
    Ok(done())
}

async fn start_command(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    body: String,
) -> Result<Json<Value>, SimError> {
    let request: StartCommand =
        serde_json::from_str(&body).map_err(|e| SimError::InvalidBody(e.to_string()))?;
    state.write().await.start(&name, request)?;
    Ok(done())
}

async fn stop_command(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, SimError> {
    state.write().await.stop(&name)?;
    Ok(done())
}

async fn move_command(
    State(state): State<SharedState>,
    Path((name, frame)): Path<(String, String)>,
) -> Result<Json<Value>, SimError> {
    let frame = frame.parse::<u32>().map_err(|_| SimError::NoSuchFrame)?;
    state.write().await.move_command(&name, frame)?;
    Ok(done())
}

async fn reset(State(state): State<SharedState>) -> Json<Value> {
    state.write().await.reset();
    done()
}

async fn unknown_endpoint() -> SimError {
    SimError::UnknownEndpoint
}
