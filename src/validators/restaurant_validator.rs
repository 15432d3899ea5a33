//! Restaurant validation: field constraints plus the unique-phone check.

use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};
use crate::models::{NewRestaurant, RestaurantDraft};
use crate::repositories::RestaurantRepository;

/// Field reported when the unique-phone-number check fails.
pub const UNIQUE_PHONE_FIELD: &str = "phoneNumber";

/// Message reported when the unique-phone-number check fails.
pub const UNIQUE_PHONE_MESSAGE: &str =
    "That phone number is already used, please use a unique phone number";

/// Validates submitted restaurant data before it reaches the repository.
#[derive(Clone)]
pub struct RestaurantValidator {
    restaurants: RestaurantRepository,
}

impl RestaurantValidator {
    /// Creates a new RestaurantValidator backed by the given repository.
    pub fn new(restaurants: RestaurantRepository) -> Self {
        Self { restaurants }
    }

    /// Validates a submitted restaurant and produces the insertable record.
    ///
    /// Field checks run first and report every violation together. The
    /// unique-phone lookup only runs once all fields are well formed.
    ///
    /// # Arguments
    /// * `draft` - The raw submitted fields
    /// * `id` - The target row id on update, used to rule out a conflict
    ///   with the record itself; `None` on create
    pub async fn validate(
        &self,
        draft: &RestaurantDraft,
        id: Option<i64>,
    ) -> AppResult<NewRestaurant> {
        let new_restaurant =
            check_fields(draft).map_err(|violations| AppError::FieldViolations { violations })?;

        if self
            .phone_number_already_exists(&new_restaurant.phone_number, id)
            .await?
        {
            return Err(AppError::unique_conflict(
                UNIQUE_PHONE_FIELD,
                UNIQUE_PHONE_MESSAGE,
            ));
        }

        Ok(new_restaurant)
    }

    /// Two-step uniqueness check: look the phone number up, then rule out
    /// the case where the match is the record being updated.
    async fn phone_number_already_exists(&self, phone: &str, id: Option<i64>) -> AppResult<bool> {
        let candidate = self.restaurants.find_by_phone_number(phone).await?;

        if candidate.is_none() {
            return Ok(false);
        }

        if let Some(id) = id {
            if let Some(with_id) = self.restaurants.find_by_id(id).await? {
                if with_id.phone_number == phone {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}

/// Runs every field-constraint check, returning the validated record or the
/// full violation map.
fn check_fields(draft: &RestaurantDraft) -> Result<NewRestaurant, BTreeMap<String, String>> {
    let mut violations = BTreeMap::new();

    super::check_name(draft.name.as_deref(), &mut violations);
    super::check_phone_number(draft.phone_number.as_deref(), &mut violations);
    check_postcode(draft.postcode.as_deref(), &mut violations);

    match (&draft.name, &draft.phone_number, &draft.postcode) {
        (Some(name), Some(phone_number), Some(postcode)) if violations.is_empty() => {
            Ok(NewRestaurant {
                name: name.clone(),
                phone_number: phone_number.clone(),
                postcode: postcode.clone(),
            })
        }
        _ => Err(violations),
    }
}

fn check_postcode(value: Option<&str>, violations: &mut BTreeMap<String, String>) {
    match value {
        None => {
            violations.insert("postcode".to_string(), "Postcode is required".to_string());
        }
        Some(postcode) => {
            if postcode.chars().count() != 6 {
                violations.insert(
                    "postcode".to_string(),
                    "Postcode size must be 6".to_string(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RestaurantDraft {
        RestaurantDraft {
            name: Some("TestRestaurant".to_string()),
            phone_number: Some("01234567890".to_string()),
            postcode: Some("AB123C".to_string()),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let new_restaurant = check_fields(&valid_draft()).expect("draft should be valid");
        assert_eq!(new_restaurant.name, "TestRestaurant");
        assert_eq!(new_restaurant.phone_number, "01234567890");
        assert_eq!(new_restaurant.postcode, "AB123C");
    }

    #[test]
    fn test_all_invalid_fields_reported_simultaneously() {
        // name with specials, phone without leading zero and too short,
        // postcode of five characters
        let draft = RestaurantDraft {
            name: Some("&^".to_string()),
            phone_number: Some("123".to_string()),
            postcode: Some("12345".to_string()),
        };
        let violations = check_fields(&draft).unwrap_err();
        let fields: Vec<&str> = violations.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["name", "phoneNumber", "postcode"]);
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let violations = check_fields(&RestaurantDraft::default()).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(violations.contains_key("name"));
        assert!(violations.contains_key("phoneNumber"));
        assert!(violations.contains_key("postcode"));
    }

    #[test]
    fn test_postcode_must_be_exactly_six_chars() {
        for (postcode, ok) in [("AB123C", true), ("AB12C", false), ("AB123CD", false)] {
            let draft = RestaurantDraft {
                postcode: Some(postcode.to_string()),
                ..valid_draft()
            };
            assert_eq!(check_fields(&draft).is_ok(), ok, "postcode: {}", postcode);
        }
    }

    #[test]
    fn test_phone_pattern_enforced() {
        let draft = RestaurantDraft {
            phone_number: Some("0123456789".to_string()),
            ..valid_draft()
        };
        let violations = check_fields(&draft).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations.contains_key("phoneNumber"));
    }
}
