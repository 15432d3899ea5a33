//! Review repository for async database operations.
//!
//! Review lookups join the referenced user and restaurant rows in, since
//! API responses embed both. Reviews are ordered by id ascending.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewReview, Restaurant, Review, ReviewRecord, User};
use crate::schema::{restaurants, reviews, users};

/// Review repository holding an async connection pool.
#[derive(Clone)]
pub struct ReviewRepository {
    pool: AsyncDbPool,
}

impl ReviewRepository {
    /// Creates a new ReviewRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all reviews with their user and restaurant, ordered by id.
    pub async fn find_all(&self) -> Result<Vec<ReviewRecord>, AppError> {
        let mut conn = self.pool.get().await?;

        reviews::table
            .inner_join(users::table)
            .inner_join(restaurants::table)
            .order(reviews::id.asc())
            .select((
                Review::as_select(),
                User::as_select(),
                Restaurant::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a review by its ID, with the referenced user and restaurant.
    ///
    /// # Returns
    /// `Some(ReviewRecord)` if found, `None` otherwise
    pub async fn find_by_id(&self, review_id: i64) -> Result<Option<ReviewRecord>, AppError> {
        let mut conn = self.pool.get().await?;

        reviews::table
            .inner_join(users::table)
            .inner_join(restaurants::table)
            .filter(reviews::id.eq(review_id))
            .select((
                Review::as_select(),
                User::as_select(),
                Restaurant::as_select(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all reviews written by the given user, ordered by id.
    pub async fn find_by_user_id(&self, author_id: i64) -> Result<Vec<ReviewRecord>, AppError> {
        let mut conn = self.pool.get().await?;

        reviews::table
            .inner_join(users::table)
            .inner_join(restaurants::table)
            .filter(reviews::user_id.eq(author_id))
            .order(reviews::id.asc())
            .select((
                Review::as_select(),
                User::as_select(),
                Restaurant::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all reviews for the given restaurant, ordered by id.
    pub async fn find_by_restaurant_id(
        &self,
        place_id: i64,
    ) -> Result<Vec<ReviewRecord>, AppError> {
        let mut conn = self.pool.get().await?;

        reviews::table
            .inner_join(users::table)
            .inner_join(restaurants::table)
            .filter(reviews::restaurant_id.eq(place_id))
            .order(reviews::id.asc())
            .select((
                Review::as_select(),
                User::as_select(),
                Restaurant::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Creates a new review in the database.
    ///
    /// # Returns
    /// The created review row with its generated id
    pub async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let mut conn = self.pool.get().await?;

        tracing::info!(
            user_id = new_review.user_id,
            restaurant_id = new_review.restaurant_id,
            "ReviewRepository::create"
        );

        diesel::insert_into(reviews::table)
            .values(&new_review)
            .returning(Review::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites a review's fields. The id itself is immutable.
    ///
    /// # Returns
    /// The updated review row
    pub async fn update(&self, review_id: i64, changes: NewReview) -> Result<Review, AppError> {
        let mut conn = self.pool.get().await?;

        tracing::info!(
            review_id,
            user_id = changes.user_id,
            restaurant_id = changes.restaurant_id,
            "ReviewRepository::update"
        );

        diesel::update(reviews::table.filter(reviews::id.eq(review_id)))
            .set(&changes)
            .returning(Review::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a review from the database.
    ///
    /// Deleting a row that does not exist is a logged no-op, not an error.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, review_id: i64) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        let affected = diesel::delete(reviews::table.filter(reviews::id.eq(review_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)?;

        if affected == 0 {
            tracing::info!(review_id, "ReviewRepository::delete - nothing to delete");
        } else {
            tracing::info!(review_id, "ReviewRepository::delete");
        }

        Ok(affected)
    }

    /// Deletes every review written by the given user, on an
    /// already-acquired connection.
    ///
    /// Used by the user cascade-delete transaction in the service layer.
    ///
    /// # Returns
    /// The number of reviews removed
    pub async fn delete_all_by_user(
        conn: &mut AsyncPgConnection,
        author_id: i64,
    ) -> Result<usize, AppError> {
        diesel::delete(reviews::table.filter(reviews::user_id.eq(author_id)))
            .execute(conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes every review for the given restaurant, on an
    /// already-acquired connection.
    ///
    /// Used by the restaurant cascade-delete transaction in the service layer.
    ///
    /// # Returns
    /// The number of reviews removed
    pub async fn delete_all_by_restaurant(
        conn: &mut AsyncPgConnection,
        place_id: i64,
    ) -> Result<usize, AppError> {
        diesel::delete(reviews::table.filter(reviews::restaurant_id.eq(place_id)))
            .execute(conn)
            .await
            .map_err(AppError::from)
    }
}
