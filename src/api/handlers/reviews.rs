//! Review CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::doc::REVIEW_TAG;
use crate::api::dto::{CreateReviewRequest, ErrorResponse, ReviewResponse, UpdateReviewRequest};
use crate::error::AppError;
use crate::state::AppState;

const ID_MISMATCH_MESSAGE: &str =
    "The Review ID in the request body must match that of the Review being updated";

/// Creates review-related routes.
///
/// Routes:
/// - GET /                            - List all reviews ordered by id
/// - POST /                           - Create a new review
/// - GET /{id}                        - Get review by ID
/// - PUT /{id}                        - Update review by ID
/// - DELETE /{id}                     - Delete review by ID
/// - GET /user/{userId}               - List reviews written by a user
/// - GET /restaurant/{restaurantId}   - List reviews for a restaurant
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route(
            "/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/user/{user_id}", get(list_reviews_by_user))
        .route(
            "/restaurant/{restaurant_id}",
            get(list_reviews_by_restaurant),
        )
}

/// GET /reviews - List all reviews ordered by id.
#[utoipa::path(
    get,
    path = "/reviews",
    responses(
        (status = 200, description = "All stored reviews", body = [ReviewResponse])
    ),
    tag = REVIEW_TAG
)]
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.services.reviews.list_reviews().await?;
    let responses: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(responses))
}

/// GET /reviews/{id} - Get review by ID.
#[utoipa::path(
    get,
    path = "/reviews/{id}",
    responses(
        (status = 200, description = "Review found", body = ReviewResponse),
        (status = 404, description = "Review with id not found", body = ErrorResponse)
    ),
    tag = REVIEW_TAG
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = state.services.reviews.get_review(id).await?;
    Ok(Json(ReviewResponse::from(review)))
}

/// GET /reviews/user/{user_id} - List reviews written by a user.
///
/// An empty result is reported as not found.
#[utoipa::path(
    get,
    path = "/reviews/user/{user_id}",
    responses(
        (status = 200, description = "Reviews found", body = [ReviewResponse]),
        (status = 404, description = "No reviews for the user", body = ErrorResponse)
    ),
    tag = REVIEW_TAG
)]
pub async fn list_reviews_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.services.reviews.list_reviews_by_user(user_id).await?;

    if reviews.is_empty() {
        return Err(AppError::NotFound {
            message: format!("No reviews found for the user ID {}", user_id),
        });
    }

    let responses: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(responses))
}

/// GET /reviews/restaurant/{restaurant_id} - List reviews for a restaurant.
///
/// An empty result is reported as not found.
#[utoipa::path(
    get,
    path = "/reviews/restaurant/{restaurant_id}",
    responses(
        (status = 200, description = "Reviews found", body = [ReviewResponse]),
        (status = 404, description = "No reviews for the restaurant", body = ErrorResponse)
    ),
    tag = REVIEW_TAG
)]
pub async fn list_reviews_by_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state
        .services
        .reviews
        .list_reviews_by_restaurant(restaurant_id)
        .await?;

    if reviews.is_empty() {
        return Err(AppError::NotFound {
            message: format!("No reviews found for the restaurant ID {}", restaurant_id),
        });
    }

    let responses: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(responses))
}

/// POST /reviews - Create a new review.
///
/// Any client-supplied id is ignored. Returns 201 with the created review,
/// embedding its user and restaurant.
#[utoipa::path(
    post,
    path = "/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created successfully", body = ReviewResponse),
        (status = 400, description = "Invalid review supplied in request body", body = ErrorResponse),
        (status = 409, description = "A review for this user and restaurant already exists", body = ErrorResponse)
    ),
    tag = REVIEW_TAG
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    let review = state
        .services
        .reviews
        .create_review(payload.into_draft())
        .await?;
    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}

/// PUT /reviews/{id} - Update an existing review.
///
/// The body must carry the target's id; a mismatch with the path id is a
/// conflict and nothing is persisted.
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated successfully", body = ReviewResponse),
        (status = 400, description = "Invalid review supplied in request body", body = ErrorResponse),
        (status = 404, description = "Review with id not found", body = ErrorResponse),
        (status = 409, description = "Review conflicts with another review", body = ErrorResponse)
    ),
    tag = REVIEW_TAG
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let body_id = payload
        .id
        .ok_or_else(|| AppError::bad_request("Invalid Review supplied in request body"))?;

    if body_id != id {
        return Err(AppError::IdConflict {
            message: ID_MISMATCH_MESSAGE.to_string(),
        });
    }

    let review = state
        .services
        .reviews
        .update_review(id, payload.into_draft())
        .await?;
    Ok(Json(ReviewResponse::from(review)))
}

/// DELETE /reviews/{id} - Delete a review.
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    responses(
        (status = 204, description = "The review has been successfully deleted"),
        (status = 404, description = "Review with id not found", body = ErrorResponse)
    ),
    tag = REVIEW_TAG
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.services.reviews.delete_review(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
