use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use liftlog::db::models::{
    NewWorkoutExercise, NewWorkoutSession, WorkoutExercise, WorkoutExerciseWithDetails,
    WorkoutSession, WorkoutSessionWithExercises,
};
use liftlog::store::workouts::HISTORY_LIMIT;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_for_user).post(create))
        .route("/:id", get(get_one))
        .route("/:id/exercises", post(append_exercise))
        .route("/history/:exercise_id/:equipment_id", get(history))
        .route("/latest/:exercise_id/:equipment_id", get(latest))
}

/// The caller identifies itself with a `user_id` query parameter; presence
/// and numeric shape are checked here, before any store call.
#[derive(Debug, Deserialize)]
struct UserQuery {
    user_id: Option<String>,
}

fn require_user_id(query: &UserQuery) -> Result<i64, ApiError> {
    let raw = query
        .user_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("User ID is required"))?;
    raw.parse::<i64>()
        .map_err(|_| ApiError::bad_request("Invalid user ID format"))
}

async fn list_for_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<Vec<WorkoutSession>>> {
    let user_id = require_user_id(&query)?;
    Ok(Json(state.workouts.list_sessions_for_user(user_id).await?))
}

/// An empty `exercises` array creates a bare session; a non-empty one
/// takes the transactional session-plus-entries path.
async fn create(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
    Json(input): Json<NewWorkoutSession>,
) -> Result<Response, ApiError> {
    let user_id = require_user_id(&query)?;

    if input.exercises.is_empty() {
        let session = state.workouts.create_session(user_id, input.gym_id).await?;
        Ok((StatusCode::CREATED, Json(session)).into_response())
    } else {
        let created = state
            .workouts
            .create_session_with_exercises(user_id, input.gym_id, &input.exercises)
            .await?;
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<WorkoutSessionWithExercises>> {
    let user_id = require_user_id(&query)?;
    Ok(Json(state.workouts.get_session_with_exercises(id, user_id).await?))
}

async fn append_exercise(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
    Json(input): Json<NewWorkoutExercise>,
) -> ApiResult<(StatusCode, Json<WorkoutExercise>)> {
    let created = state.workouts.append_exercise(session_id, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn history(
    State(state): State<AppState>,
    Path((exercise_id, equipment_id)): Path<(i64, i64)>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<Vec<WorkoutExerciseWithDetails>>> {
    let user_id = require_user_id(&query)?;
    let entries = state
        .workouts
        .exercise_history(exercise_id, equipment_id, user_id, HISTORY_LIMIT)
        .await?;
    Ok(Json(entries))
}

async fn latest(
    State(state): State<AppState>,
    Path((exercise_id, equipment_id)): Path<(i64, i64)>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<WorkoutExerciseWithDetails>> {
    let user_id = require_user_id(&query)?;
    let entry = state
        .workouts
        .latest_exercise(exercise_id, equipment_id, user_id)
        .await?;
    Ok(Json(entry))
}
