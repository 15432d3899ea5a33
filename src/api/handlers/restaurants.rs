//! Restaurant CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::doc::RESTAURANT_TAG;
use crate::api::dto::{
    CreateRestaurantRequest, ErrorResponse, RestaurantResponse, UpdateRestaurantRequest,
};
use crate::error::AppError;
use crate::state::AppState;

const ID_MISMATCH_MESSAGE: &str =
    "The Restaurant ID in the request body must match that of the Restaurant being updated";

/// Creates restaurant-related routes.
///
/// Routes:
/// - GET /        - List all restaurants ordered by name
/// - POST /       - Create a new restaurant
/// - GET /{id}    - Get restaurant by ID
/// - PUT /{id}    - Update restaurant by ID
/// - DELETE /{id} - Delete restaurant by ID (cascades to its reviews)
pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_restaurants).post(create_restaurant))
        .route(
            "/{id}",
            get(get_restaurant)
                .put(update_restaurant)
                .delete(delete_restaurant),
        )
}

/// GET /restaurants - List all restaurants ordered by name.
#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All stored restaurants", body = [RestaurantResponse])
    ),
    tag = RESTAURANT_TAG
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    let restaurants = state.services.restaurants.list_restaurants().await?;
    let responses: Vec<RestaurantResponse> = restaurants
        .into_iter()
        .map(RestaurantResponse::from)
        .collect();
    Ok(Json(responses))
}

/// GET /restaurants/{id} - Get restaurant by ID.
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant found", body = RestaurantResponse),
        (status = 404, description = "Restaurant with id not found", body = ErrorResponse)
    ),
    tag = RESTAURANT_TAG
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = state.services.restaurants.get_restaurant(id).await?;
    Ok(Json(RestaurantResponse::from(restaurant)))
}

/// POST /restaurants - Create a new restaurant.
///
/// Any client-supplied id is ignored. Returns 201 with the created
/// restaurant.
#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created successfully", body = RestaurantResponse),
        (status = 400, description = "Invalid restaurant supplied in request body", body = ErrorResponse),
        (status = 409, description = "Restaurant conflicts with an existing restaurant", body = ErrorResponse)
    ),
    tag = RESTAURANT_TAG
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<RestaurantResponse>), AppError> {
    let restaurant = state
        .services
        .restaurants
        .create_restaurant(payload.into_draft())
        .await?;
    Ok((StatusCode::CREATED, Json(RestaurantResponse::from(restaurant))))
}

/// PUT /restaurants/{id} - Update an existing restaurant.
///
/// The body must carry the target's id; a mismatch with the path id is a
/// conflict and nothing is persisted.
#[utoipa::path(
    put,
    path = "/restaurants/{id}",
    request_body = UpdateRestaurantRequest,
    responses(
        (status = 200, description = "Restaurant updated successfully", body = RestaurantResponse),
        (status = 400, description = "Invalid restaurant supplied in request body", body = ErrorResponse),
        (status = 404, description = "Restaurant with id not found", body = ErrorResponse),
        (status = 409, description = "Restaurant conflicts with another restaurant", body = ErrorResponse)
    ),
    tag = RESTAURANT_TAG
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRestaurantRequest>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let body_id = payload
        .id
        .ok_or_else(|| AppError::bad_request("Invalid Restaurant supplied in request body"))?;

    if body_id != id {
        return Err(AppError::IdConflict {
            message: ID_MISMATCH_MESSAGE.to_string(),
        });
    }

    let restaurant = state
        .services
        .restaurants
        .update_restaurant(id, payload.into_draft())
        .await?;
    Ok(Json(RestaurantResponse::from(restaurant)))
}

/// DELETE /restaurants/{id} - Delete a restaurant and all of its reviews.
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "The restaurant has been successfully deleted"),
        (status = 404, description = "Restaurant with id not found", body = ErrorResponse)
    ),
    tag = RESTAURANT_TAG
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.services.restaurants.delete_restaurant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
