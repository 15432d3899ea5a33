//! Review-related DTOs for API requests and responses.
//!
//! Review requests reference their user and restaurant as embedded objects
//! of which only the `id` is read; responses embed the full objects.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RestaurantResponse, UserResponse};
use crate::models::{ReviewDraft, ReviewRecord};

// ============================================================================
// Request DTOs
// ============================================================================

/// An embedded entity reference; only the id is significant, any other
/// submitted fields of the embedded object are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EntityRef {
    pub id: Option<i64>,
}

/// Request body for creating a new review.
///
/// A missing `rating` is treated as zero, which the range check accepts.
/// A client-supplied `id` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub user: Option<EntityRef>,
    pub restaurant: Option<EntityRef>,
    pub review: Option<String>,
    #[serde(default)]
    pub rating: i32,
}

impl CreateReviewRequest {
    /// Converts the request DTO into a draft for validation.
    pub fn into_draft(self) -> ReviewDraft {
        ReviewDraft {
            user_id: self.user.and_then(|u| u.id),
            restaurant_id: self.restaurant.and_then(|r| r.id),
            review: self.review,
            rating: self.rating,
        }
    }
}

/// Request body for updating a review.
///
/// The `id` must be present and match the path id.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub id: Option<i64>,
    pub user: Option<EntityRef>,
    pub restaurant: Option<EntityRef>,
    pub review: Option<String>,
    #[serde(default)]
    pub rating: i32,
}

impl UpdateReviewRequest {
    /// Converts the request DTO into a draft for validation.
    pub fn into_draft(self) -> ReviewDraft {
        ReviewDraft {
            user_id: self.user.and_then(|u| u.id),
            restaurant_id: self.restaurant.and_then(|r| r.id),
            review: self.review,
            rating: self.rating,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for review data, embedding the referenced user and
/// restaurant.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: i64,
    pub user: UserResponse,
    pub restaurant: RestaurantResponse,
    pub review: String,
    pub rating: i32,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from((review, user, restaurant): ReviewRecord) -> Self {
        Self {
            id: review.id,
            user: UserResponse::from(user),
            restaurant: RestaurantResponse::from(restaurant),
            review: review.review,
            rating: review.rating,
        }
    }
}
