#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use liftlog::db::models::{NewGym, NewGymEquipment};
use liftlog::store::{CatalogStore, GymStore};

/// Fresh in-memory database with the schema applied. A single connection
/// that is never reaped, so the database lives as long as the pool.
pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("connect to in-memory database");
    liftlog::db::init_database(&pool)
        .await
        .expect("apply migrations");
    pool
}

pub struct Inventory {
    pub gym_id: i64,
    pub equipment_type_id: i64,
    pub exercise_id: i64,
    pub gym_equipment_id: i64,
}

/// One gym for `user_id` holding one piece of equipment, plus a catalog
/// exercise to log against it.
pub async fn seed_inventory(pool: &SqlitePool, user_id: i64) -> Inventory {
    let catalog = CatalogStore::new(pool.clone());
    let gyms = GymStore::new(pool.clone());

    let equipment_type = catalog
        .create_equipment_type("Flat bench")
        .await
        .expect("create equipment type");
    let exercise = catalog
        .create_exercise("Bench press")
        .await
        .expect("create exercise");
    let gym = gyms
        .create_gym(&NewGym {
            user_id,
            name: "Garage".to_string(),
        })
        .await
        .expect("create gym");
    let equipment = gyms
        .add_gym_equipment(
            gym.id,
            &NewGymEquipment {
                equipment_type_id: equipment_type.id,
                weight: Some(20.0),
                notes: None,
            },
        )
        .await
        .expect("add gym equipment");

    Inventory {
        gym_id: gym.id,
        equipment_type_id: equipment_type.id,
        exercise_id: exercise.id,
        gym_equipment_id: equipment.id,
    }
}
