use liftlog::store::{CatalogStore, GymStore, UserStore, WorkoutStore};
use sqlx::SqlitePool;

/// Every store gets the pool at construction; handlers reach them through
/// this shared state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub gyms: GymStore,
    pub workouts: WorkoutStore,
    pub users: UserStore,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            catalog: CatalogStore::new(pool.clone()),
            gyms: GymStore::new(pool.clone()),
            workouts: WorkoutStore::new(pool.clone()),
            users: UserStore::new(pool),
        }
    }
}
