use crate::achievements::{self, Badge};
use crate::errors::AppError;
use crate::filter::{self, Filter};
use crate::models::{
    AddGoalRequest, AppData, EditGoalRequest, GoalListResponse, GoalQuery, StatsResponse, Theme,
    ThemeRequest, TimelineEntry, ToggleGoalRequest,
};
use crate::state::AppState;
use crate::stats;
use crate::storage::persist_data;
use crate::store;
use crate::templates::{GoalTemplate, TEMPLATES};
use crate::transfer;
use crate::ui::render_index;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data))
}

pub async fn list_goals(
    State(state): State<AppState>,
    Query(query): Query<GoalQuery>,
) -> Json<GoalListResponse> {
    let data = state.data.lock().await;
    let goals = filter::apply(
        &data.todos,
        Filter::parse(query.filter.as_deref()),
        query.q.as_deref(),
    );

    Json(GoalListResponse {
        goals,
        counts: stats::counts(&data.todos),
        theme: data.theme,
    })
}

pub async fn add_goal(
    State(state): State<AppState>,
    Json(payload): Json<AddGoalRequest>,
) -> Result<Json<GoalListResponse>, AppError> {
    if payload.target_age == Some(0) {
        return Err(AppError::bad_request("targetAge must be a positive integer"));
    }

    let mut data = state.data.lock().await;
    // Blank text is a silent no-op: the unchanged list comes back.
    let added = store::add_goal(
        &mut data.todos,
        &payload.text,
        payload.category,
        payload.priority,
        payload.target_age,
        Utc::now(),
    );
    if added.is_some() {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(list_response(&data)))
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleGoalRequest>,
) -> Result<Json<GoalListResponse>, AppError> {
    let mut data = state.data.lock().await;
    let changed = store::toggle_goal(
        &mut data.todos,
        &id,
        payload.completed_date,
        payload.proof_photo,
        Utc::now(),
    );
    if changed {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(list_response(&data)))
}

pub async fn edit_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EditGoalRequest>,
) -> Result<Json<GoalListResponse>, AppError> {
    let mut data = state.data.lock().await;
    let text = payload.text.trim();
    let changed = !text.is_empty() && store::edit_goal(&mut data.todos, &id, text);
    if changed {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(list_response(&data)))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GoalListResponse>, AppError> {
    let mut data = state.data.lock().await;
    if store::delete_goal(&mut data.todos, &id) {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(list_response(&data)))
}

pub async fn clear_completed(
    State(state): State<AppState>,
) -> Result<Json<GoalListResponse>, AppError> {
    let mut data = state.data.lock().await;
    if store::clear_completed(&mut data.todos) > 0 {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(list_response(&data)))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let data = state.data.lock().await;
    Json(stats::build_stats(&data.todos))
}

pub async fn get_achievements(State(state): State<AppState>) -> Json<Vec<Badge>> {
    let data = state.data.lock().await;
    Json(achievements::evaluate(&stats::build_stats(&data.todos)))
}

pub async fn get_timeline(State(state): State<AppState>) -> Json<Vec<TimelineEntry>> {
    let data = state.data.lock().await;
    Json(filter::timeline(&data.todos))
}

pub async fn get_templates() -> Json<[GoalTemplate; 18]> {
    Json(TEMPLATES)
}

/// Serves the backup document as a dated download.
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let data = state.data.lock().await;
    let document = transfer::export_document(&data, now);
    let payload = serde_json::to_vec_pretty(&document)?;

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", transfer::export_file_name(now)),
        ),
    ];
    Ok((headers, payload))
}

/// Accepts a backup document. A document without a usable `todos` array is
/// ignored (logged only) and the unchanged list comes back.
pub async fn import(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GoalListResponse>, AppError> {
    let mut data = state.data.lock().await;
    if transfer::apply_import(&mut data, &body) {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(list_response(&data)))
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Result<Json<Theme>, AppError> {
    let mut data = state.data.lock().await;
    data.theme = payload.theme;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(data.theme))
}

fn list_response(data: &AppData) -> GoalListResponse {
    GoalListResponse {
        goals: data.todos.clone(),
        counts: stats::counts(&data.todos),
        theme: data.theme,
    }
}
