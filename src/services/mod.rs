//! Service layer for business logic operations.
//!
//! Services orchestrate validators and repositories: create and update
//! validate before persisting, and deleting a user or restaurant runs the
//! review cascade and the parent delete inside one transaction.

mod restaurant_service;
mod review_service;
mod user_service;

pub use restaurant_service::RestaurantService;
pub use review_service::ReviewService;
pub use user_service::UserService;

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::validators::{RestaurantValidator, ReviewValidator, UserValidator};

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the underlying pool uses `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub restaurants: RestaurantService,
    pub reviews: ReviewService,
}

impl Services {
    /// Creates a new Services instance from the pool and repositories.
    pub fn new(pool: AsyncDbPool, repos: Repositories) -> Self {
        Self {
            users: UserService::new(
                pool.clone(),
                UserValidator::new(repos.users.clone()),
                repos.users.clone(),
            ),
            restaurants: RestaurantService::new(
                pool.clone(),
                RestaurantValidator::new(repos.restaurants.clone()),
                repos.restaurants.clone(),
            ),
            reviews: ReviewService::new(
                ReviewValidator::new(repos.reviews.clone()),
                repos.reviews,
                repos.users,
                repos.restaurants,
            ),
        }
    }
}
