//! Read-side joins that decorate raw rows with catalog names.
//!
//! Pure reads, no mutation. A failed join surfaces as a database error;
//! the workout ledger's in-transaction name fallback is the one caller
//! that tolerates failure here.

use sqlx::SqlitePool;

use crate::db::models::{GymEquipmentWithDetails, WorkoutExerciseWithDetails};

pub async fn gym_equipment_details(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<GymEquipmentWithDetails>, sqlx::Error> {
    sqlx::query_as::<_, GymEquipmentWithDetails>(
        "SELECT
            ge.id,
            ge.gym_id,
            ge.equipment_type_id,
            et.name AS equipment_name,
            ge.weight,
            ge.notes
        FROM gym_equipment ge
        JOIN equipment_types et ON ge.equipment_type_id = et.id
        WHERE ge.id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn gym_equipment_for_gym(
    pool: &SqlitePool,
    gym_id: i64,
) -> Result<Vec<GymEquipmentWithDetails>, sqlx::Error> {
    sqlx::query_as::<_, GymEquipmentWithDetails>(
        "SELECT
            ge.id,
            ge.gym_id,
            ge.equipment_type_id,
            et.name AS equipment_name,
            ge.weight,
            ge.notes
        FROM gym_equipment ge
        JOIN equipment_types et ON ge.equipment_type_id = et.id
        WHERE ge.gym_id = ?1
        ORDER BY ge.id",
    )
    .bind(gym_id)
    .fetch_all(pool)
    .await
}

/// Entries of one session in insertion order.
pub async fn exercises_for_session(
    pool: &SqlitePool,
    session_id: i64,
) -> Result<Vec<WorkoutExerciseWithDetails>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutExerciseWithDetails>(
        "SELECT
            we.id,
            we.workout_session_id,
            we.exercise_id,
            e.name AS exercise_name,
            we.gym_equipment_id,
            et.name AS equipment_name,
            we.weight,
            we.reps,
            we.sets,
            we.created_at
        FROM workout_exercises we
        JOIN exercises e ON e.id = we.exercise_id
        JOIN gym_equipment ge ON ge.id = we.gym_equipment_id
        JOIN equipment_types et ON et.id = ge.equipment_type_id
        WHERE we.workout_session_id = ?1
        ORDER BY we.id",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await
}

/// Most recent entries for one exercise on one piece of equipment, owned
/// by `user_id`, newest first. Entry id breaks ties between equal
/// second-resolution timestamps.
pub async fn exercise_history(
    pool: &SqlitePool,
    exercise_id: i64,
    equipment_id: i64,
    user_id: i64,
    limit: i64,
) -> Result<Vec<WorkoutExerciseWithDetails>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutExerciseWithDetails>(
        "SELECT
            we.id,
            we.workout_session_id,
            we.exercise_id,
            e.name AS exercise_name,
            we.gym_equipment_id,
            et.name AS equipment_name,
            we.weight,
            we.reps,
            we.sets,
            we.created_at
        FROM workout_exercises we
        JOIN exercises e ON we.exercise_id = e.id
        JOIN workout_sessions ws ON we.workout_session_id = ws.id
        JOIN gym_equipment ge ON we.gym_equipment_id = ge.id
        JOIN equipment_types et ON ge.equipment_type_id = et.id
        WHERE we.exercise_id = ?1
        AND we.gym_equipment_id = ?2
        AND ws.user_id = ?3
        ORDER BY we.created_at DESC, we.id DESC
        LIMIT ?4",
    )
    .bind(exercise_id)
    .bind(equipment_id)
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
