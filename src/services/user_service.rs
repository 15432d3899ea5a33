//! User service for business logic operations.
//!
//! Wraps the user validator and repository, and owns the cascade that
//! removes a user's reviews together with the user.

use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{User, UserDraft};
use crate::repositories::{ReviewRepository, UserRepository};
use crate::validators::UserValidator;

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    pool: AsyncDbPool,
    validator: UserValidator,
    repo: UserRepository,
}

impl UserService {
    /// Creates a new UserService with its dependencies.
    pub fn new(pool: AsyncDbPool, validator: UserValidator, repo: UserRepository) -> Self {
        Self {
            pool,
            validator,
            repo,
        }
    }

    /// Lists all users ordered by name.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", "id", id))
    }

    /// Gets a user by email address.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User", "email", email))
    }

    /// Validates and creates a new user.
    ///
    /// Any validation failure aborts before the repository is touched.
    pub async fn create_user(&self, draft: UserDraft) -> AppResult<User> {
        let new_user = self.validator.validate(&draft, None).await?;
        self.repo.create(new_user).await
    }

    /// Validates and applies a full-record update to an existing user.
    ///
    /// The target must exist; the unique-email check excludes the record
    /// being updated.
    pub async fn update_user(&self, id: i64, draft: UserDraft) -> AppResult<User> {
        self.get_user(id).await?;
        let changes = self.validator.validate(&draft, Some(id)).await?;
        self.repo.update(id, changes).await
    }

    /// Deletes a user and every review they have written.
    ///
    /// The review deletes and the user delete run in a single transaction;
    /// a failure at any point rolls the whole cascade back.
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        let user = self.get_user(id).await?;
        tracing::info!(user_id = id, user_name = %user.name, "UserService::delete_user");

        let mut conn = self.pool.get().await?;
        conn.transaction::<_, AppError, _>(|conn| {
            async move {
                let removed = ReviewRepository::delete_all_by_user(conn, id).await?;
                if removed > 0 {
                    tracing::info!(user_id = id, removed, "Cascade-deleted reviews for user");
                }
                UserRepository::delete_by_id(conn, id).await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
