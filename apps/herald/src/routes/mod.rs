pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation_handlers;
use crate::profile::handlers as profile_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate-email",
            post(generation_handlers::handle_generate_email),
        )
        .route(
            "/personal-info",
            get(profile_handlers::handle_get_personal_info),
        )
        .route(
            "/update-personal-info",
            post(profile_handlers::handle_update_personal_info),
        )
        .with_state(state)
}
