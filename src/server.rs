use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ConsoleConfig;
use crate::database::{DocumentStore, StoreError};
use crate::handlers;

/// Shared per-request state: the startup configuration plus the store handle.
/// The store is `None` when the database was never configured or could not be
/// constructed; requests then fail per operation instead of at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ConsoleConfig,
    pub store: Option<DocumentStore>,
}

impl AppState {
    pub fn new(config: ConsoleConfig, store: Option<DocumentStore>) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> Result<&DocumentStore, StoreError> {
        self.store.as_ref().ok_or(StoreError::Unavailable)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/test", get(handlers::status))
        // Generic record API
        .merge(api_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/create", post(handlers::create))
        .route("/api/list/:collection", get(handlers::list))
}

/// GET / - liveness marker
async fn root() -> Json<Value> {
    Json(json!({ "message": "Console API is running" }))
}
