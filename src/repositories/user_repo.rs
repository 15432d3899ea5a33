//! User repository for async database operations.
//!
//! Provides CRUD operations for the users table using diesel_async.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewUser, User};

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<UserRepository>`.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all users ordered by name ascending.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .order(name.asc())
            .select(User::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a user by their ID.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a user by their email address.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_email(&self, user_email: &str) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(email.eq(user_email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `new_user` - Validated user data to insert
    ///
    /// # Returns
    /// The created user with its generated id
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        tracing::info!(user_name = %new_user.name, "UserRepository::create");

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites a user's fields. The id itself is immutable.
    ///
    /// # Returns
    /// The updated user
    pub async fn update(&self, user_id: i64, changes: NewUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        tracing::info!(user_id, user_name = %changes.name, "UserRepository::update");

        diesel::update(users.filter(id.eq(user_id)))
            .set(&changes)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a user from the database.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, user_id: i64) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;
        Self::delete_by_id(&mut conn, user_id).await
    }

    /// Deletes a user on an already-acquired connection.
    ///
    /// Used by the cascade-delete transaction in the service layer. Deleting
    /// a row that does not exist is a logged no-op, not an error.
    pub async fn delete_by_id(
        conn: &mut AsyncPgConnection,
        user_id: i64,
    ) -> Result<usize, AppError> {
        use crate::schema::users::dsl::*;

        let affected = diesel::delete(users.filter(id.eq(user_id)))
            .execute(conn)
            .await
            .map_err(AppError::from)?;

        if affected == 0 {
            tracing::info!(user_id, "UserRepository::delete_by_id - nothing to delete");
        } else {
            tracing::info!(user_id, "UserRepository::delete_by_id");
        }

        Ok(affected)
    }
}
