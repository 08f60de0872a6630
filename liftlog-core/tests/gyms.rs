mod common;

use liftlog::db::models::{NewGym, NewGymEquipment, NewWorkoutExercise};
use liftlog::error::StoreError;
use liftlog::store::{GymStore, WorkoutStore};

#[tokio::test]
async fn create_gym_requires_a_name() {
    let pool = common::setup_pool().await;
    let gyms = GymStore::new(pool.clone());

    let err = gyms
        .create_gym(&NewGym {
            user_id: 1,
            name: "   ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::BadRequest(_)));
}

#[tokio::test]
async fn missing_gym_lookups_are_not_found() {
    let pool = common::setup_pool().await;
    let gyms = GymStore::new(pool.clone());

    assert!(matches!(
        gyms.get_gym(99).await.unwrap_err(),
        StoreError::NotFound(_)
    ));
    assert!(matches!(
        gyms.update_gym(
            99,
            &NewGym {
                user_id: 1,
                name: "Anywhere".to_string()
            }
        )
        .await
        .unwrap_err(),
        StoreError::NotFound(_)
    ));
    assert!(matches!(
        gyms.delete_gym(99).await.unwrap_err(),
        StoreError::NotFound(_)
    ));
}

// A user without gyms gets NotFound, not an empty list; same for a gym
// without equipment. The catalog lists return empty vectors instead.
#[tokio::test]
async fn empty_listings_are_not_found() {
    let pool = common::setup_pool().await;
    let gyms = GymStore::new(pool.clone());

    assert!(matches!(
        gyms.list_gyms_for_user(12).await.unwrap_err(),
        StoreError::NotFound(_)
    ));

    let gym = gyms
        .create_gym(&NewGym {
            user_id: 12,
            name: "Basement".to_string(),
        })
        .await
        .unwrap();

    let listed = gyms.list_gyms_for_user(12).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, gym.id);

    assert!(matches!(
        gyms.list_gym_equipment(gym.id).await.unwrap_err(),
        StoreError::NotFound(_)
    ));
}

#[tokio::test]
async fn equipment_round_trip_keeps_type_name() {
    let pool = common::setup_pool().await;
    let inventory = common::seed_inventory(&pool, 7).await;
    let gyms = GymStore::new(pool.clone());

    let fetched = gyms
        .get_gym_equipment(inventory.gym_equipment_id)
        .await
        .unwrap();
    assert_eq!(fetched.equipment_name, "Flat bench");
    assert_eq!(fetched.weight, Some(20.0));

    let updated = gyms
        .update_gym_equipment(
            inventory.gym_equipment_id,
            &NewGymEquipment {
                equipment_type_id: inventory.equipment_type_id,
                weight: Some(25.0),
                notes: Some("re-weighed".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.equipment_name, "Flat bench");
    assert_eq!(updated.weight, Some(25.0));

    let fetched_again = gyms
        .get_gym_equipment(inventory.gym_equipment_id)
        .await
        .unwrap();
    assert_eq!(fetched_again.equipment_name, "Flat bench");
    assert_eq!(fetched_again.weight, Some(25.0));
    assert_eq!(fetched_again.notes.as_deref(), Some("re-weighed"));
}

#[tokio::test]
async fn equipment_update_validates_both_sides() {
    let pool = common::setup_pool().await;
    let inventory = common::seed_inventory(&pool, 7).await;
    let gyms = GymStore::new(pool.clone());

    let err = gyms
        .update_gym_equipment(
            999,
            &NewGymEquipment {
                equipment_type_id: inventory.equipment_type_id,
                weight: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let err = gyms
        .update_gym_equipment(
            inventory.gym_equipment_id,
            &NewGymEquipment {
                equipment_type_id: 999,
                weight: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::BadRequest(_)));
}

#[tokio::test]
async fn equipment_in_use_cannot_be_deleted() {
    let pool = common::setup_pool().await;
    let inventory = common::seed_inventory(&pool, 7).await;
    let gyms = GymStore::new(pool.clone());
    let workouts = WorkoutStore::new(pool.clone());

    let session = workouts.create_session(7, inventory.gym_id).await.unwrap();
    workouts
        .append_exercise(
            session.id,
            &NewWorkoutExercise {
                exercise_id: inventory.exercise_id,
                gym_equipment_id: inventory.gym_equipment_id,
                weight: 40.0,
                reps: 10,
                sets: 4,
            },
        )
        .await
        .unwrap();

    let err = gyms
        .delete_gym_equipment(inventory.gym_equipment_id)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    // Still present and still joined to its type.
    let kept = gyms
        .get_gym_equipment(inventory.gym_equipment_id)
        .await
        .unwrap();
    assert_eq!(kept.equipment_name, "Flat bench");
}
