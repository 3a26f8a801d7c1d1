use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/goals", get(handlers::list_goals).post(handlers::add_goal))
        .route("/api/goals/clear-completed", post(handlers::clear_completed))
        .route("/api/goals/:id/toggle", post(handlers::toggle_goal))
        .route("/api/goals/:id", put(handlers::edit_goal).delete(handlers::delete_goal))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/achievements", get(handlers::get_achievements))
        .route("/api/timeline", get(handlers::get_timeline))
        .route("/api/templates", get(handlers::get_templates))
        .route("/api/export", get(handlers::export))
        .route("/api/import", post(handlers::import))
        .route("/api/theme", post(handlers::set_theme))
        .with_state(state)
}
