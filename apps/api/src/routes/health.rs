use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a status object with service version and active backends.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "eligibility-api",
        "catalog": state.catalog.backend(),
        "narrative": state.composer.name()
    }))
}

/// GET /
/// Service banner listing the endpoint groups.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Student Eligibility Chatbot API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "chatbot": "/api/chatbot",
            "colleges": "/api/colleges",
            "scholarships": "/api/scholarships"
        }
    }))
}
