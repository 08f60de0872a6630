use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use liftlog::db::models::{EquipmentType, NewEquipmentType};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(delete_one))
}

async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<EquipmentType>>> {
    Ok(Json(state.catalog.list_equipment_types().await?))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EquipmentType>> {
    Ok(Json(state.catalog.get_equipment_type(id).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewEquipmentType>,
) -> ApiResult<(StatusCode, Json<EquipmentType>)> {
    let created = state.catalog.create_equipment_type(&input.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewEquipmentType>,
) -> ApiResult<Json<EquipmentType>> {
    Ok(Json(state.catalog.update_equipment_type(id, &input.name).await?))
}

async fn delete_one(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Value>> {
    state.catalog.delete_equipment_type(id).await?;
    Ok(Json(json!({ "message": "Equipment type deleted successfully" })))
}
