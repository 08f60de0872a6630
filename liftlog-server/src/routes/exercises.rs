use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use liftlog::db::models::{Exercise, NewExercise};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", put(update).delete(delete_one))
}

async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Exercise>>> {
    Ok(Json(state.catalog.list_exercises().await?))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewExercise>,
) -> ApiResult<(StatusCode, Json<Exercise>)> {
    let created = state.catalog.create_exercise(&input.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewExercise>,
) -> ApiResult<Json<Exercise>> {
    Ok(Json(state.catalog.update_exercise(id, &input.name).await?))
}

async fn delete_one(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Value>> {
    state.catalog.delete_exercise(id).await?;
    Ok(Json(json!({ "message": "Exercise deleted successfully" })))
}
