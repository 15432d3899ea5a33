//! Restaurant repository for async database operations.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewRestaurant, Restaurant};

/// Restaurant repository holding an async connection pool.
#[derive(Clone)]
pub struct RestaurantRepository {
    pool: AsyncDbPool,
}

impl RestaurantRepository {
    /// Creates a new RestaurantRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all restaurants ordered by name ascending.
    pub async fn find_all(&self) -> Result<Vec<Restaurant>, AppError> {
        use crate::schema::restaurants::dsl::*;
        let mut conn = self.pool.get().await?;

        restaurants
            .order(name.asc())
            .select(Restaurant::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a restaurant by its ID.
    ///
    /// # Returns
    /// `Some(Restaurant)` if found, `None` otherwise
    pub async fn find_by_id(&self, restaurant_id: i64) -> Result<Option<Restaurant>, AppError> {
        use crate::schema::restaurants::dsl::*;
        let mut conn = self.pool.get().await?;

        restaurants
            .filter(id.eq(restaurant_id))
            .select(Restaurant::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a restaurant by its phone number, the unique business key.
    ///
    /// # Returns
    /// `Some(Restaurant)` if found, `None` otherwise
    pub async fn find_by_phone_number(&self, phone: &str) -> Result<Option<Restaurant>, AppError> {
        use crate::schema::restaurants::dsl::*;
        let mut conn = self.pool.get().await?;

        restaurants
            .filter(phone_number.eq(phone))
            .select(Restaurant::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Creates a new restaurant in the database.
    ///
    /// # Returns
    /// The created restaurant with its generated id
    pub async fn create(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, AppError> {
        use crate::schema::restaurants::dsl::*;
        let mut conn = self.pool.get().await?;

        tracing::info!(restaurant_name = %new_restaurant.name, "RestaurantRepository::create");

        diesel::insert_into(restaurants)
            .values(&new_restaurant)
            .returning(Restaurant::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites a restaurant's fields. The id itself is immutable.
    ///
    /// # Returns
    /// The updated restaurant
    pub async fn update(
        &self,
        restaurant_id: i64,
        changes: NewRestaurant,
    ) -> Result<Restaurant, AppError> {
        use crate::schema::restaurants::dsl::*;
        let mut conn = self.pool.get().await?;

        tracing::info!(restaurant_id, restaurant_name = %changes.name, "RestaurantRepository::update");

        diesel::update(restaurants.filter(id.eq(restaurant_id)))
            .set(&changes)
            .returning(Restaurant::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a restaurant from the database.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, restaurant_id: i64) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;
        Self::delete_by_id(&mut conn, restaurant_id).await
    }

    /// Deletes a restaurant on an already-acquired connection.
    ///
    /// Used by the cascade-delete transaction in the service layer. Deleting
    /// a row that does not exist is a logged no-op, not an error.
    pub async fn delete_by_id(
        conn: &mut AsyncPgConnection,
        restaurant_id: i64,
    ) -> Result<usize, AppError> {
        use crate::schema::restaurants::dsl::*;

        let affected = diesel::delete(restaurants.filter(id.eq(restaurant_id)))
            .execute(conn)
            .await
            .map_err(AppError::from)?;

        if affected == 0 {
            tracing::info!(
                restaurant_id,
                "RestaurantRepository::delete_by_id - nothing to delete"
            );
        } else {
            tracing::info!(restaurant_id, "RestaurantRepository::delete_by_id");
        }

        Ok(affected)
    }
}
