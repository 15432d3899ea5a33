//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities. The delete
//! statements used by cascade deletion are also exposed as
//! connection-scoped functions so the service layer can compose them
//! inside a single transaction.

mod restaurant_repo;
mod review_repo;
mod user_repo;

pub use restaurant_repo::RestaurantRepository;
pub use review_repo::ReviewRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub restaurants: RestaurantRepository,
    pub reviews: ReviewRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            restaurants: RestaurantRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool),
        }
    }
}
