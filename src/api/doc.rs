use utoipa::OpenApi;

pub const USER_TAG: &str = "User";
pub const RESTAURANT_TAG: &str = "Restaurant";
pub const REVIEW_TAG: &str = "Review";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Plateful",
        description = "A restaurant-review API server",
    ),
    paths(
        crate::api::handlers::users::list_users,
        crate::api::handlers::users::get_user,
        crate::api::handlers::users::get_user_by_email,
        crate::api::handlers::users::create_user,
        crate::api::handlers::users::update_user,
        crate::api::handlers::users::delete_user,
        crate::api::handlers::restaurants::list_restaurants,
        crate::api::handlers::restaurants::get_restaurant,
        crate::api::handlers::restaurants::create_restaurant,
        crate::api::handlers::restaurants::update_restaurant,
        crate::api::handlers::restaurants::delete_restaurant,
        crate::api::handlers::reviews::list_reviews,
        crate::api::handlers::reviews::get_review,
        crate::api::handlers::reviews::list_reviews_by_user,
        crate::api::handlers::reviews::list_reviews_by_restaurant,
        crate::api::handlers::reviews::create_review,
        crate::api::handlers::reviews::update_review,
        crate::api::handlers::reviews::delete_review,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = USER_TAG, description = "User management endpoints"),
        (name = RESTAURANT_TAG, description = "Restaurant management endpoints"),
        (name = REVIEW_TAG, description = "Review management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
