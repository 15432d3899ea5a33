//! Review validation: field constraints plus the one-review-per-pair check.

use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};
use crate::models::{NewReview, ReviewDraft};
use crate::repositories::ReviewRepository;

/// Field reported when the unique-review check fails.
pub const UNIQUE_REVIEW_FIELD: &str = "review";

/// Message reported when the unique-review check fails.
pub const UNIQUE_REVIEW_MESSAGE: &str = "A review for this user and restaurant already exists";

/// Maximum length of the review text.
const REVIEW_MAX_CHARS: usize = 300;

/// Validates submitted review data before it reaches the repository.
#[derive(Clone)]
pub struct ReviewValidator {
    reviews: ReviewRepository,
}

impl ReviewValidator {
    /// Creates a new ReviewValidator backed by the given repository.
    pub fn new(reviews: ReviewRepository) -> Self {
        Self { reviews }
    }

    /// Validates a submitted review and produces the insertable record.
    ///
    /// Field checks run first and report every violation together. The
    /// pair-uniqueness lookup only runs once all fields are well formed.
    /// The lookup does not exclude the record being updated, so changing an
    /// existing review to a pair that is already taken (including its own)
    /// is reported as a conflict.
    pub async fn validate(&self, draft: &ReviewDraft) -> AppResult<NewReview> {
        let new_review =
            check_fields(draft).map_err(|violations| AppError::FieldViolations { violations })?;

        if self
            .review_already_exists(new_review.user_id, new_review.restaurant_id)
            .await?
        {
            return Err(AppError::unique_conflict(
                UNIQUE_REVIEW_FIELD,
                UNIQUE_REVIEW_MESSAGE,
            ));
        }

        Ok(new_review)
    }

    /// Checks whether the user has already reviewed the restaurant, by
    /// listing the user's reviews and scanning for the restaurant id.
    async fn review_already_exists(&self, user_id: i64, restaurant_id: i64) -> AppResult<bool> {
        let existing = self.reviews.find_by_user_id(user_id).await?;

        Ok(existing
            .iter()
            .any(|(review, _, _)| review.restaurant_id == restaurant_id))
    }
}

/// Runs every field-constraint check, returning the validated record or the
/// full violation map.
fn check_fields(draft: &ReviewDraft) -> Result<NewReview, BTreeMap<String, String>> {
    let mut violations = BTreeMap::new();

    if draft.user_id.is_none() {
        violations.insert("user".to_string(), "User is required".to_string());
    }
    if draft.restaurant_id.is_none() {
        violations.insert(
            "restaurant".to_string(),
            "Restaurant is required".to_string(),
        );
    }

    match draft.review.as_deref() {
        None => {
            violations.insert("review".to_string(), "Review text is required".to_string());
        }
        Some(text) => {
            if text.chars().count() > REVIEW_MAX_CHARS {
                violations.insert(
                    "review".to_string(),
                    "Review must be no more than 300 characters".to_string(),
                );
            }
        }
    }

    if !(0..=5).contains(&draft.rating) {
        violations.insert(
            "rating".to_string(),
            "Rating must be between 0 and 5".to_string(),
        );
    }

    match (draft.user_id, draft.restaurant_id, &draft.review) {
        (Some(user_id), Some(restaurant_id), Some(review)) if violations.is_empty() => {
            Ok(NewReview {
                user_id,
                restaurant_id,
                review: review.clone(),
                rating: draft.rating,
            })
        }
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            user_id: Some(1),
            restaurant_id: Some(2),
            review: Some("Great!".to_string()),
            rating: 5,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let new_review = check_fields(&valid_draft()).expect("draft should be valid");
        assert_eq!(new_review.user_id, 1);
        assert_eq!(new_review.restaurant_id, 2);
        assert_eq!(new_review.review, "Great!");
        assert_eq!(new_review.rating, 5);
    }

    #[test]
    fn test_missing_references_reported() {
        let draft = ReviewDraft {
            user_id: None,
            restaurant_id: None,
            ..valid_draft()
        };
        let violations = check_fields(&draft).unwrap_err();
        let fields: Vec<&str> = violations.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["restaurant", "user"]);
    }

    #[test]
    fn test_review_text_required() {
        let draft = ReviewDraft {
            review: None,
            ..valid_draft()
        };
        let violations = check_fields(&draft).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations["review"], "Review text is required");
    }

    #[test]
    fn test_review_text_over_limit_rejected() {
        let draft = ReviewDraft {
            review: Some("x".repeat(301)),
            ..valid_draft()
        };
        let violations = check_fields(&draft).unwrap_err();
        assert!(violations["review"].contains("300"));
    }

    #[test]
    fn test_review_text_at_limit_accepted() {
        let draft = ReviewDraft {
            review: Some("x".repeat(300)),
            ..valid_draft()
        };
        assert!(check_fields(&draft).is_ok());
    }

    #[test]
    fn test_empty_review_text_accepted() {
        // Only an upper bound applies to the text itself
        let draft = ReviewDraft {
            review: Some(String::new()),
            ..valid_draft()
        };
        assert!(check_fields(&draft).is_ok());
    }

    #[test]
    fn test_rating_bounds() {
        for (rating, ok) in [(0, true), (5, true), (-1, false), (6, false)] {
            let draft = ReviewDraft {
                rating,
                ..valid_draft()
            };
            assert_eq!(check_fields(&draft).is_ok(), ok, "rating: {}", rating);
        }
    }

    #[test]
    fn test_everything_wrong_reports_all_fields() {
        let draft = ReviewDraft {
            user_id: None,
            restaurant_id: None,
            review: None,
            rating: 9,
        };
        let violations = check_fields(&draft).unwrap_err();
        let fields: Vec<&str> = violations.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["rating", "restaurant", "review", "user"]);
    }
}
