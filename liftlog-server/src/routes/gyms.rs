use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use liftlog::db::models::{Gym, GymEquipment, GymEquipmentWithDetails, NewGym, NewGymEquipment};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/id/:id", get(get_one))
        .route("/user/:user_id", get(list_for_user))
        .route("/:id", put(update).delete(delete_one))
        .route("/:id/equipment", get(list_equipment).post(add_equipment))
}

/// Standalone equipment routes; the lookup is a POST carrying the id in
/// the body rather than a path param.
pub fn equipment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(get_equipment))
        .route("/:id", put(update_equipment).delete(delete_equipment))
}

async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Gym>>> {
    Ok(Json(state.gyms.list_gyms().await?))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewGym>,
) -> ApiResult<(StatusCode, Json<Gym>)> {
    let created = state.gyms.create_gym(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_one(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Gym>> {
    Ok(Json(state.gyms.get_gym(id).await?))
}

async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Gym>>> {
    Ok(Json(state.gyms.list_gyms_for_user(user_id).await?))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewGym>,
) -> ApiResult<Json<Gym>> {
    Ok(Json(state.gyms.update_gym(id, &input).await?))
}

async fn delete_one(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Value>> {
    state.gyms.delete_gym(id).await?;
    Ok(Json(json!({ "message": "Deleted gym successfully" })))
}

async fn list_equipment(
    State(state): State<AppState>,
    Path(gym_id): Path<i64>,
) -> ApiResult<Json<Vec<GymEquipmentWithDetails>>> {
    Ok(Json(state.gyms.list_gym_equipment(gym_id).await?))
}

async fn add_equipment(
    State(state): State<AppState>,
    Path(gym_id): Path<i64>,
    Json(input): Json<NewGymEquipment>,
) -> ApiResult<(StatusCode, Json<GymEquipment>)> {
    let created = state.gyms.add_gym_equipment(gym_id, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Deserialize)]
struct EquipmentLookup {
    id: i64,
}

async fn get_equipment(
    State(state): State<AppState>,
    Json(lookup): Json<EquipmentLookup>,
) -> ApiResult<Json<GymEquipmentWithDetails>> {
    Ok(Json(state.gyms.get_gym_equipment(lookup.id).await?))
}

async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewGymEquipment>,
) -> ApiResult<Json<GymEquipmentWithDetails>> {
    Ok(Json(state.gyms.update_gym_equipment(id, &input).await?))
}

async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    state.gyms.delete_gym_equipment(id).await?;
    Ok(Json(json!({ "message": "Equipment removed successfully" })))
}
