//! Restaurant service for business logic operations.
//!
//! Wraps the restaurant validator and repository, and owns the cascade that
//! removes a restaurant's reviews together with the restaurant.

use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Restaurant, RestaurantDraft};
use crate::repositories::{RestaurantRepository, ReviewRepository};
use crate::validators::RestaurantValidator;

/// Restaurant service for handling restaurant-related business logic.
#[derive(Clone)]
pub struct RestaurantService {
    pool: AsyncDbPool,
    validator: RestaurantValidator,
    repo: RestaurantRepository,
}

impl RestaurantService {
    /// Creates a new RestaurantService with its dependencies.
    pub fn new(
        pool: AsyncDbPool,
        validator: RestaurantValidator,
        repo: RestaurantRepository,
    ) -> Self {
        Self {
            pool,
            validator,
            repo,
        }
    }

    /// Lists all restaurants ordered by name.
    pub async fn list_restaurants(&self) -> AppResult<Vec<Restaurant>> {
        self.repo.find_all().await
    }

    /// Gets a restaurant by id.
    ///
    /// # Returns
    /// The restaurant if found, or `NotFound` error
    pub async fn get_restaurant(&self, id: i64) -> AppResult<Restaurant> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Restaurant", "id", id))
    }

    /// Validates and creates a new restaurant.
    ///
    /// Any validation failure aborts before the repository is touched.
    pub async fn create_restaurant(&self, draft: RestaurantDraft) -> AppResult<Restaurant> {
        let new_restaurant = self.validator.validate(&draft, None).await?;
        self.repo.create(new_restaurant).await
    }

    /// Validates and applies a full-record update to an existing restaurant.
    ///
    /// The target must exist; the unique-phone check excludes the record
    /// being updated.
    pub async fn update_restaurant(
        &self,
        id: i64,
        draft: RestaurantDraft,
    ) -> AppResult<Restaurant> {
        self.get_restaurant(id).await?;
        let changes = self.validator.validate(&draft, Some(id)).await?;
        self.repo.update(id, changes).await
    }

    /// Deletes a restaurant and every review that references it.
    ///
    /// The review deletes and the restaurant delete run in a single
    /// transaction; a failure at any point rolls the whole cascade back.
    pub async fn delete_restaurant(&self, id: i64) -> AppResult<()> {
        let restaurant = self.get_restaurant(id).await?;
        tracing::info!(
            restaurant_id = id,
            restaurant_name = %restaurant.name,
            "RestaurantService::delete_restaurant"
        );

        let mut conn = self.pool.get().await?;
        conn.transaction::<_, AppError, _>(|conn| {
            async move {
                let removed = ReviewRepository::delete_all_by_restaurant(conn, id).await?;
                if removed > 0 {
                    tracing::info!(
                        restaurant_id = id,
                        removed,
                        "Cascade-deleted reviews for restaurant"
                    );
                }
                RestaurantRepository::delete_by_id(conn, id).await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
