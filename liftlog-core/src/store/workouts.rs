//! Workout ledger: transactional session creation and historical queries.
//!
//! A creation request runs Begin -> insert session -> insert entries in
//! input order -> Commit; any failed step rolls the whole unit back, so a
//! session with N entries persists as exactly 1 + N rows or none at all.

use log::{debug, warn};
use sqlx::SqlitePool;

use crate::db::models::{
    NewWorkoutExercise, WorkoutExercise, WorkoutExerciseWithDetails, WorkoutSession,
    WorkoutSessionWithExercises,
};
use crate::error::{StoreError, StoreResult};
use crate::store::assembler;

/// History depth of `exercise_history` callers; latest-entry lookups use 1.
pub const HISTORY_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct WorkoutStore {
    pool: SqlitePool,
}

impl WorkoutStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_session(&self, user_id: i64, gym_id: i64) -> StoreResult<WorkoutSession> {
        let mut tx = self.pool.begin().await?;
        let session = sqlx::query_as::<_, WorkoutSession>(
            "INSERT INTO workout_sessions (user_id, gym_id) VALUES (?1, ?2)
             RETURNING id, user_id, gym_id, created_at",
        )
        .bind(user_id)
        .bind(gym_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(session)
    }

    /// Creates a session and all its entries in one transaction.
    ///
    /// Name resolution for the response is the documented exception to
    /// all-or-nothing: a failed lookup leaves "Unknown" names on the entry
    /// instead of aborting, and never touches the persisted numbers.
    pub async fn create_session_with_exercises(
        &self,
        user_id: i64,
        gym_id: i64,
        entries: &[NewWorkoutExercise],
    ) -> StoreResult<WorkoutSessionWithExercises> {
        let mut tx = self.pool.begin().await?;

        let session = sqlx::query_as::<_, WorkoutSession>(
            "INSERT INTO workout_sessions (user_id, gym_id) VALUES (?1, ?2)
             RETURNING id, user_id, gym_id, created_at",
        )
        .bind(user_id)
        .bind(gym_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut exercises = Vec::with_capacity(entries.len());
        for entry in entries {
            let inserted = sqlx::query_as::<_, WorkoutExercise>(
                "INSERT INTO workout_exercises
                 (workout_session_id, exercise_id, gym_equipment_id, weight, reps, sets)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 RETURNING id, workout_session_id, exercise_id, gym_equipment_id,
                           weight, reps, sets, created_at",
            )
            .bind(session.id)
            .bind(entry.exercise_id)
            .bind(entry.gym_equipment_id)
            .bind(entry.weight)
            .bind(entry.reps)
            .bind(entry.sets)
            .fetch_one(&mut *tx)
            .await?;

            let names = match sqlx::query_as::<_, (String, String)>(
                "SELECT e.name, et.name
                 FROM exercises e
                 JOIN gym_equipment ge ON ge.id = ?1
                 JOIN equipment_types et ON et.id = ge.equipment_type_id
                 WHERE e.id = ?2",
            )
            .bind(entry.gym_equipment_id)
            .bind(entry.exercise_id)
            .fetch_optional(&mut *tx)
            .await
            {
                Ok(names) => names,
                Err(err) => {
                    warn!(
                        "name lookup failed for exercise {}: {}",
                        entry.exercise_id, err
                    );
                    None
                }
            };
            let (exercise_name, equipment_name) =
                names.unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));

            exercises.push(WorkoutExerciseWithDetails {
                id: inserted.id,
                workout_session_id: inserted.workout_session_id,
                exercise_id: inserted.exercise_id,
                exercise_name,
                gym_equipment_id: inserted.gym_equipment_id,
                equipment_name,
                weight: inserted.weight,
                reps: inserted.reps,
                sets: inserted.sets,
                created_at: inserted.created_at,
            });
        }

        tx.commit().await?;
        Ok(WorkoutSessionWithExercises { session, exercises })
    }

    /// Appends one entry to an existing session. The session existence
    /// check and the insert share a transaction.
    pub async fn append_exercise(
        &self,
        session_id: i64,
        entry: &NewWorkoutExercise,
    ) -> StoreResult<WorkoutExercise> {
        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM workout_sessions WHERE id = ?1)")
                .bind(session_id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Err(StoreError::not_found("Workout session not found"));
        }

        let inserted = sqlx::query_as::<_, WorkoutExercise>(
            "INSERT INTO workout_exercises
             (workout_session_id, exercise_id, gym_equipment_id, weight, reps, sets)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id, workout_session_id, exercise_id, gym_equipment_id,
                       weight, reps, sets, created_at",
        )
        .bind(session_id)
        .bind(entry.exercise_id)
        .bind(entry.gym_equipment_id)
        .bind(entry.weight)
        .bind(entry.reps)
        .bind(entry.sets)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn list_sessions_for_user(&self, user_id: i64) -> StoreResult<Vec<WorkoutSession>> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, user_id, gym_id, created_at
             FROM workout_sessions
             WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sessions)
    }

    /// The owner filter is part of the lookup predicate: a session that
    /// exists under another user is indistinguishable from one that does
    /// not exist.
    pub async fn get_session_with_exercises(
        &self,
        session_id: i64,
        user_id: i64,
    ) -> StoreResult<WorkoutSessionWithExercises> {
        let session = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, user_id, gym_id, created_at
             FROM workout_sessions
             WHERE id = ?1 AND user_id = ?2",
        )
        .bind(session_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::not_found("Workout not found or not authorized"))?;

        let exercises = assembler::exercises_for_session(&self.pool, session_id).await?;
        Ok(WorkoutSessionWithExercises { session, exercises })
    }

    pub async fn exercise_history(
        &self,
        exercise_id: i64,
        equipment_id: i64,
        user_id: i64,
        limit: i64,
    ) -> StoreResult<Vec<WorkoutExerciseWithDetails>> {
        let history =
            assembler::exercise_history(&self.pool, exercise_id, equipment_id, user_id, limit)
                .await?;
        Ok(history)
    }

    /// Unlike `exercise_history`, no match here is NotFound rather than an
    /// empty list.
    pub async fn latest_exercise(
        &self,
        exercise_id: i64,
        equipment_id: i64,
        user_id: i64,
    ) -> StoreResult<WorkoutExerciseWithDetails> {
        let mut rows =
            assembler::exercise_history(&self.pool, exercise_id, equipment_id, user_id, 1).await?;
        let Some(entry) = rows.pop() else {
            return Err(StoreError::not_found(
                "No previous workout found for this exercise and equipment",
            ));
        };
        debug!("latest entry for user {}: {}", user_id, entry);
        Ok(entry)
    }
}
