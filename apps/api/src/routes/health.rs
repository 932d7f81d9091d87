use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service version and the size of the loaded scoring tables.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "explora-api",
        "careers": state.tables.careers.len(),
        "reportModes": ["local", "delegated"]
    }))
}
