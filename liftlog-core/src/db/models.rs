use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// User models. The password hash never leaves the users store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

// Gym models
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Gym {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct NewGym {
    pub user_id: i64,
    pub name: String,
}

// Catalog models
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EquipmentType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewEquipmentType {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewExercise {
    pub name: String,
}

// Gym equipment models
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GymEquipment {
    pub id: i64,
    pub gym_id: i64,
    pub equipment_type_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewGymEquipment {
    pub equipment_type_id: i64,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

/// Inventory row joined with its equipment type name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GymEquipmentWithDetails {
    pub id: i64,
    pub gym_id: i64,
    pub equipment_type_id: i64,
    pub equipment_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// Workout models
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WorkoutSession {
    pub id: i64,
    pub user_id: i64,
    pub gym_id: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WorkoutExercise {
    pub id: i64,
    pub workout_session_id: i64,
    pub exercise_id: i64,
    pub gym_equipment_id: i64,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWorkoutExercise {
    pub exercise_id: i64,
    pub gym_equipment_id: i64,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
}

/// One logged set-group joined with exercise and equipment names.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WorkoutExerciseWithDetails {
    pub id: i64,
    pub workout_session_id: i64,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub gym_equipment_id: i64,
    pub equipment_name: String,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
    pub created_at: NaiveDateTime,
}

impl fmt::Display for WorkoutExerciseWithDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: {:.1}kg x {} reps x {} sets",
            self.exercise_name, self.equipment_name, self.weight, self.reps, self.sets
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSessionWithExercises {
    #[serde(flatten)]
    pub session: WorkoutSession,
    pub exercises: Vec<WorkoutExerciseWithDetails>,
}

#[derive(Debug, Deserialize)]
pub struct NewWorkoutSession {
    pub gym_id: i64,
    #[serde(default)]
    pub exercises: Vec<NewWorkoutExercise>,
}
