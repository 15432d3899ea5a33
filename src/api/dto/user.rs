//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{User, UserDraft};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
///
/// All fields are optional at the wire level; presence is enforced by the
/// validator so that a missing field shows up in the same `reasons` map as
/// any other violation. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl CreateUserRequest {
    /// Converts the request DTO into a draft for validation.
    pub fn into_draft(self) -> UserDraft {
        UserDraft {
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

/// Request body for updating a user.
///
/// The `id` must be present and match the path id.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdateUserRequest {
    /// Converts the request DTO into a draft for validation.
    pub fn into_draft(self) -> UserDraft {
        UserDraft {
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
        }
    }
}
