mod common;

use liftlog::db::models::NewWorkoutExercise;
use liftlog::error::StoreError;
use liftlog::store::{CatalogStore, WorkoutStore};

#[tokio::test]
async fn duplicate_equipment_type_name_conflicts() {
    let pool = common::setup_pool().await;
    let catalog = CatalogStore::new(pool.clone());

    let first = catalog.create_equipment_type("Barbell").await.unwrap();
    assert_eq!(first.name, "Barbell");

    let err = catalog.create_equipment_type("Barbell").await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)), "got {err:?}");

    // Exactly one row survived the pair of creates.
    let types = catalog.list_equipment_types().await.unwrap();
    assert_eq!(types.len(), 1);
}

#[tokio::test]
async fn list_is_ordered_by_name_and_empty_is_ok() {
    let pool = common::setup_pool().await;
    let catalog = CatalogStore::new(pool.clone());

    assert!(catalog.list_equipment_types().await.unwrap().is_empty());
    assert!(catalog.list_exercises().await.unwrap().is_empty());

    for name in ["Treadmill", "Barbell", "Kettlebell"] {
        catalog.create_equipment_type(name).await.unwrap();
    }

    let names: Vec<String> = catalog
        .list_equipment_types()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Barbell", "Kettlebell", "Treadmill"]);
}

#[tokio::test]
async fn create_rejects_blank_names() {
    let pool = common::setup_pool().await;
    let catalog = CatalogStore::new(pool.clone());

    let err = catalog.create_equipment_type("  ").await.unwrap_err();
    assert!(matches!(err, StoreError::BadRequest(_)));

    let err = catalog.create_exercise("").await.unwrap_err();
    assert!(matches!(err, StoreError::BadRequest(_)));
}

#[tokio::test]
async fn update_distinguishes_missing_from_duplicate() {
    let pool = common::setup_pool().await;
    let catalog = CatalogStore::new(pool.clone());

    let err = catalog.update_equipment_type(42, "Rack").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let barbell = catalog.create_equipment_type("Barbell").await.unwrap();
    catalog.create_equipment_type("Dumbbell").await.unwrap();

    let err = catalog
        .update_equipment_type(barbell.id, "Dumbbell")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    let renamed = catalog
        .update_equipment_type(barbell.id, "Olympic barbell")
        .await
        .unwrap();
    assert_eq!(renamed.id, barbell.id);
    assert_eq!(renamed.name, "Olympic barbell");
}

#[tokio::test]
async fn referenced_equipment_type_cannot_be_deleted() {
    let pool = common::setup_pool().await;
    let inventory = common::seed_inventory(&pool, 7).await;
    let catalog = CatalogStore::new(pool.clone());

    let err = catalog
        .delete_equipment_type(inventory.equipment_type_id)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    // The guard left the row untouched.
    let kept = catalog
        .get_equipment_type(inventory.equipment_type_id)
        .await
        .unwrap();
    assert_eq!(kept.id, inventory.equipment_type_id);

    let unused = catalog.create_equipment_type("Rowing machine").await.unwrap();
    catalog.delete_equipment_type(unused.id).await.unwrap();

    let err = catalog.delete_equipment_type(unused.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn referenced_exercise_cannot_be_deleted() {
    let pool = common::setup_pool().await;
    let inventory = common::seed_inventory(&pool, 7).await;
    let catalog = CatalogStore::new(pool.clone());
    let workouts = WorkoutStore::new(pool.clone());

    let session = workouts.create_session(7, inventory.gym_id).await.unwrap();
    workouts
        .append_exercise(
            session.id,
            &NewWorkoutExercise {
                exercise_id: inventory.exercise_id,
                gym_equipment_id: inventory.gym_equipment_id,
                weight: 60.0,
                reps: 8,
                sets: 3,
            },
        )
        .await
        .unwrap();

    let err = catalog
        .delete_exercise(inventory.exercise_id)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));
}
