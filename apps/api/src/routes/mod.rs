pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::contact::handlers::handle_send;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/send", post(handle_send))
        .route("/chat", post(handle_chat))
        .with_state(state)
}
