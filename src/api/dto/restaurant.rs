//! Restaurant-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Restaurant, RestaurantDraft};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new restaurant.
///
/// All fields are optional at the wire level; presence is enforced by the
/// validator. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub postcode: Option<String>,
}

impl CreateRestaurantRequest {
    /// Converts the request DTO into a draft for validation.
    pub fn into_draft(self) -> RestaurantDraft {
        RestaurantDraft {
            name: self.name,
            phone_number: self.phone_number,
            postcode: self.postcode,
        }
    }
}

/// Request body for updating a restaurant.
///
/// The `id` must be present and match the path id.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub postcode: Option<String>,
}

impl UpdateRestaurantRequest {
    /// Converts the request DTO into a draft for validation.
    pub fn into_draft(self) -> RestaurantDraft {
        RestaurantDraft {
            name: self.name,
            phone_number: self.phone_number,
            postcode: self.postcode,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for restaurant data.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub postcode: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            phone_number: restaurant.phone_number,
            postcode: restaurant.postcode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_camel_case() {
        let response = RestaurantResponse::from(Restaurant {
            id: 3,
            name: "TestRestaurant".to_string(),
            phone_number: "01234567890".to_string(),
            postcode: "AB123C".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "TestRestaurant",
                "phoneNumber": "01234567890",
                "postcode": "AB123C"
            })
        );
    }

    #[test]
    fn test_create_request_into_draft() {
        let request: CreateRestaurantRequest = serde_json::from_str(
            r#"{"name":"TestRestaurant","phoneNumber":"01234567890","postcode":"AB123C"}"#,
        )
        .unwrap();

        let draft = request.into_draft();
        assert_eq!(draft.name.as_deref(), Some("TestRestaurant"));
        assert_eq!(draft.phone_number.as_deref(), Some("01234567890"));
        assert_eq!(draft.postcode.as_deref(), Some("AB123C"));
    }
}
