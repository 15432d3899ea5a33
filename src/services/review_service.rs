//! Review service for business logic operations.
//!
//! Wraps the review validator and repository. Review responses embed the
//! referenced user and restaurant, so mutations resolve both rows; a
//! reference to a missing row is reported as a field violation on the
//! submitted `user`/`restaurant` field. Review deletion has no cascade.

use crate::error::{AppError, AppResult};
use crate::models::{NewReview, Restaurant, ReviewDraft, ReviewRecord, User};
use crate::repositories::{RestaurantRepository, ReviewRepository, UserRepository};
use crate::validators::ReviewValidator;

/// Review service for handling review-related business logic.
#[derive(Clone)]
pub struct ReviewService {
    validator: ReviewValidator,
    repo: ReviewRepository,
    users: UserRepository,
    restaurants: RestaurantRepository,
}

impl ReviewService {
    /// Creates a new ReviewService with its dependencies.
    pub fn new(
        validator: ReviewValidator,
        repo: ReviewRepository,
        users: UserRepository,
        restaurants: RestaurantRepository,
    ) -> Self {
        Self {
            validator,
            repo,
            users,
            restaurants,
        }
    }

    /// Lists all reviews ordered by id.
    pub async fn list_reviews(&self) -> AppResult<Vec<ReviewRecord>> {
        self.repo.find_all().await
    }

    /// Gets a review by id.
    ///
    /// # Returns
    /// The review with its user and restaurant, or `NotFound` error
    pub async fn get_review(&self, id: i64) -> AppResult<ReviewRecord> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review", "id", id))
    }

    /// Lists all reviews written by the given user.
    pub async fn list_reviews_by_user(&self, user_id: i64) -> AppResult<Vec<ReviewRecord>> {
        self.repo.find_by_user_id(user_id).await
    }

    /// Lists all reviews for the given restaurant.
    pub async fn list_reviews_by_restaurant(
        &self,
        restaurant_id: i64,
    ) -> AppResult<Vec<ReviewRecord>> {
        self.repo.find_by_restaurant_id(restaurant_id).await
    }

    /// Validates and creates a new review.
    ///
    /// Any validation failure aborts before the repository is touched.
    pub async fn create_review(&self, draft: ReviewDraft) -> AppResult<ReviewRecord> {
        let new_review = self.validator.validate(&draft).await?;
        let (user, restaurant) = self.resolve_references(&new_review).await?;

        let review = self.repo.create(new_review).await?;
        Ok((review, user, restaurant))
    }

    /// Validates and applies a full-record update to an existing review.
    pub async fn update_review(&self, id: i64, draft: ReviewDraft) -> AppResult<ReviewRecord> {
        self.get_review(id).await?;
        let changes = self.validator.validate(&draft).await?;
        let (user, restaurant) = self.resolve_references(&changes).await?;

        let review = self.repo.update(id, changes).await?;
        Ok((review, user, restaurant))
    }

    /// Deletes a review. No cascade applies.
    pub async fn delete_review(&self, id: i64) -> AppResult<()> {
        self.get_review(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Fetches the referenced user and restaurant rows.
    ///
    /// A dangling reference is a client error on the submitted field, not an
    /// internal failure; the foreign keys in the store back this up.
    async fn resolve_references(&self, review: &NewReview) -> AppResult<(User, Restaurant)> {
        let user = self
            .users
            .find_by_id(review.user_id)
            .await?
            .ok_or_else(|| {
                AppError::violation(
                    "user",
                    format!("No user with the id {} exists", review.user_id),
                )
            })?;

        let restaurant = self
            .restaurants
            .find_by_id(review.restaurant_id)
            .await?
            .ok_or_else(|| {
                AppError::violation(
                    "restaurant",
                    format!("No restaurant with the id {} exists", review.restaurant_id),
                )
            })?;

        Ok((user, restaurant))
    }
}
