//! Catalog store: shared reference rows usable across gyms and sessions.
//!
//! Equipment types and exercises are name-keyed rows with the same
//! lifecycle: unique name on create/update, deletable only while nothing
//! references them.

use sqlx::SqlitePool;

use crate::db::models::{EquipmentType, Exercise};
use crate::error::{StoreError, StoreResult};

#[derive(Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_equipment_types(&self) -> StoreResult<Vec<EquipmentType>> {
        let types =
            sqlx::query_as::<_, EquipmentType>("SELECT id, name FROM equipment_types ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(types)
    }

    pub async fn get_equipment_type(&self, id: i64) -> StoreResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>("SELECT id, name FROM equipment_types WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Equipment type not found"))
    }

    pub async fn create_equipment_type(&self, name: &str) -> StoreResult<EquipmentType> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::bad_request("Equipment type name is required"));
        }

        sqlx::query_as::<_, EquipmentType>(
            "INSERT INTO equipment_types (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            StoreError::on_unique_violation(e, "Equipment type with this name already exists")
        })
    }

    pub async fn update_equipment_type(&self, id: i64, name: &str) -> StoreResult<EquipmentType> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::bad_request("Equipment type name is required"));
        }

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment_types WHERE id = ?1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(StoreError::not_found("Equipment type not found"));
        }

        sqlx::query_as::<_, EquipmentType>(
            "UPDATE equipment_types SET name = ?1 WHERE id = ?2 RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            StoreError::on_unique_violation(e, "Equipment type with this name already exists")
        })
    }

    /// Refuses while any gym still lists equipment of this type.
    pub async fn delete_equipment_type(&self, id: i64) -> StoreResult<()> {
        let in_use: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM gym_equipment WHERE equipment_type_id = ?1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        if in_use {
            return Err(StoreError::conflict(
                "Cannot delete equipment type that is in use",
            ));
        }

        let result = sqlx::query("DELETE FROM equipment_types WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Equipment type not found"));
        }
        Ok(())
    }

    pub async fn list_exercises(&self) -> StoreResult<Vec<Exercise>> {
        let exercises =
            sqlx::query_as::<_, Exercise>("SELECT id, name FROM exercises ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(exercises)
    }

    pub async fn create_exercise(&self, name: &str) -> StoreResult<Exercise> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::bad_request("Exercise name is required"));
        }

        sqlx::query_as::<_, Exercise>("INSERT INTO exercises (name) VALUES (?1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                StoreError::on_unique_violation(e, "Exercise with this name already exists")
            })
    }

    pub async fn update_exercise(&self, id: i64, name: &str) -> StoreResult<Exercise> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::bad_request("Exercise name is required"));
        }

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM exercises WHERE id = ?1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        if !exists {
            return Err(StoreError::not_found("Exercise not found"));
        }

        sqlx::query_as::<_, Exercise>(
            "UPDATE exercises SET name = ?1 WHERE id = ?2 RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::on_unique_violation(e, "Exercise with this name already exists"))
    }

    /// Refuses while any workout entry references this exercise.
    pub async fn delete_exercise(&self, id: i64) -> StoreResult<()> {
        let in_use: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM workout_exercises WHERE exercise_id = ?1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        if in_use {
            return Err(StoreError::conflict(
                "Cannot delete exercise that is used in workouts",
            ));
        }

        let result = sqlx::query("DELETE FROM exercises WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Exercise not found"));
        }
        Ok(())
    }
}
