pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::chatbot::handlers as chatbot;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        // Chatbot
        .route("/api/chatbot/query", post(chatbot::handle_query))
        .route("/api/chatbot/analyze", post(chatbot::handle_analyze))
        // Colleges
        .route("/api/colleges", get(catalog::handle_list_colleges))
        .route("/api/colleges/search", post(catalog::handle_search_colleges))
        .route("/api/colleges/:id", get(catalog::handle_get_college))
        // Scholarships
        .route("/api/scholarships", get(catalog::handle_list_scholarships))
        .route(
            "/api/scholarships/search",
            post(catalog::handle_search_scholarships),
        )
        .route("/api/scholarships/:id", get(catalog::handle_get_scholarship))
        .with_state(state)
}
