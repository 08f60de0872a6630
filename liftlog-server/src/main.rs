//! liftlog backend entry point.
//!
//! Wires configuration, the database pool and the HTTP router together,
//! then serves until shutdown.

mod config;
mod error;
mod routes;
mod state;

use anyhow::Result;
use dotenvy::dotenv;
use log::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::load()?;

    let pool = liftlog::db::connect(&config.database_url).await?;
    liftlog::db::init_database(&pool).await?;

    let app = routes::router(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!("listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
