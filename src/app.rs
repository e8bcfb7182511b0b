use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/habits/:id/complete", post(handlers::complete_habit))
        .route("/api/habits/:id/time", post(handlers::log_time))
        .route("/api/habits/:id/series", get(handlers::get_series))
        .with_state(state)
}
