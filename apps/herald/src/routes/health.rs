use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the agent name and backing model.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let mut body = json!({
        "status": "healthy",
        "agent": "Cold Email Agent",
        "model": state.generator.model(),
    });
    if state.config.test_mode {
        body["test_mode"] = json!(true);
    }
    Json(body)
}
