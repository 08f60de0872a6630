//! Gym store: gyms and the per-gym equipment inventory.

use sqlx::SqlitePool;

use crate::db::models::{Gym, GymEquipment, GymEquipmentWithDetails, NewGym, NewGymEquipment};
use crate::error::{StoreError, StoreResult};
use crate::store::assembler;

#[derive(Clone)]
pub struct GymStore {
    pool: SqlitePool,
}

impl GymStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_gyms(&self) -> StoreResult<Vec<Gym>> {
        let gyms =
            sqlx::query_as::<_, Gym>("SELECT id, user_id, name, created_at FROM gyms ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(gyms)
    }

    pub async fn create_gym(&self, gym: &NewGym) -> StoreResult<Gym> {
        if gym.name.trim().is_empty() {
            return Err(StoreError::bad_request("Gym name is required"));
        }

        let created = sqlx::query_as::<_, Gym>(
            "INSERT INTO gyms (user_id, name) VALUES (?1, ?2) RETURNING id, user_id, name, created_at",
        )
        .bind(gym.user_id)
        .bind(gym.name.trim())
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    pub async fn get_gym(&self, id: i64) -> StoreResult<Gym> {
        sqlx::query_as::<_, Gym>("SELECT id, user_id, name, created_at FROM gyms WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Gym not found"))
    }

    /// A user with no gyms is NotFound, not an empty list. The catalog
    /// lists do the opposite; both behaviors are pinned by the API.
    pub async fn list_gyms_for_user(&self, user_id: i64) -> StoreResult<Vec<Gym>> {
        let gyms = sqlx::query_as::<_, Gym>(
            "SELECT id, user_id, name, created_at FROM gyms WHERE user_id = ?1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        if gyms.is_empty() {
            return Err(StoreError::not_found("No gyms found for this user"));
        }
        Ok(gyms)
    }

    pub async fn update_gym(&self, id: i64, gym: &NewGym) -> StoreResult<Gym> {
        if gym.name.trim().is_empty() {
            return Err(StoreError::bad_request("Gym name is required"));
        }

        sqlx::query_as::<_, Gym>(
            "UPDATE gyms SET user_id = ?2, name = ?3 WHERE id = ?1
             RETURNING id, user_id, name, created_at",
        )
        .bind(id)
        .bind(gym.user_id)
        .bind(gym.name.trim())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::not_found("Gym not found"))
    }

    pub async fn delete_gym(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM gyms WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Gym not found"));
        }
        Ok(())
    }

    pub async fn add_gym_equipment(
        &self,
        gym_id: i64,
        equipment: &NewGymEquipment,
    ) -> StoreResult<GymEquipment> {
        let created = sqlx::query_as::<_, GymEquipment>(
            "INSERT INTO gym_equipment (gym_id, equipment_type_id, weight, notes)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, gym_id, equipment_type_id, weight, notes",
        )
        .bind(gym_id)
        .bind(equipment.equipment_type_id)
        .bind(equipment.weight)
        .bind(equipment.notes.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    pub async fn get_gym_equipment(&self, id: i64) -> StoreResult<GymEquipmentWithDetails> {
        assembler::gym_equipment_details(&self.pool, id)
            .await?
            .ok_or_else(|| StoreError::not_found("Equipment not found"))
    }

    /// Same empty-is-NotFound convention as `list_gyms_for_user`.
    pub async fn list_gym_equipment(&self, gym_id: i64) -> StoreResult<Vec<GymEquipmentWithDetails>> {
        let equipment = assembler::gym_equipment_for_gym(&self.pool, gym_id).await?;
        if equipment.is_empty() {
            return Err(StoreError::not_found("No equipments found for this gym"));
        }
        Ok(equipment)
    }

    pub async fn update_gym_equipment(
        &self,
        id: i64,
        equipment: &NewGymEquipment,
    ) -> StoreResult<GymEquipmentWithDetails> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM gym_equipment WHERE id = ?1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(StoreError::not_found("Equipment not found"));
        }

        let type_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment_types WHERE id = ?1)")
                .bind(equipment.equipment_type_id)
                .fetch_one(&self.pool)
                .await?;
        if !type_exists {
            return Err(StoreError::bad_request("Equipment type not found"));
        }

        sqlx::query("UPDATE gym_equipment SET equipment_type_id = ?1, weight = ?2, notes = ?3 WHERE id = ?4")
            .bind(equipment.equipment_type_id)
            .bind(equipment.weight)
            .bind(equipment.notes.as_deref())
            .bind(id)
            .execute(&self.pool)
            .await?;

        assembler::gym_equipment_details(&self.pool, id)
            .await?
            .ok_or_else(|| StoreError::not_found("Equipment not found"))
    }

    /// Refuses while any workout entry references this equipment.
    pub async fn delete_gym_equipment(&self, id: i64) -> StoreResult<()> {
        let in_use: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM workout_exercises WHERE gym_equipment_id = ?1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        if in_use {
            return Err(StoreError::conflict(
                "Cannot delete equipment that is used in workout sessions",
            ));
        }

        let result = sqlx::query("DELETE FROM gym_equipment WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Equipment not found"));
        }
        Ok(())
    }
}
