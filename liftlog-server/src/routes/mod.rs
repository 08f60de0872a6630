//! HTTP surface: per-resource routers assembled under `/api`.

pub mod equipment_types;
pub mod exercises;
pub mod gyms;
pub mod users;
pub mod workouts;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:3000"))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .route("/", get(root_handler))
        .nest("/api/equipment-types", equipment_types::router())
        .nest("/api/exercises", exercises::router())
        .nest("/api/gyms", gyms::router())
        .nest("/api/gym-equipment", gyms::equipment_router())
        .nest("/api/workouts", workouts::router())
        .nest("/api/users", users::router())
        .layer(cors)
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Welcome to liftlog!"
}
