//! User validation: field constraints plus the unique-email check.

use std::collections::BTreeMap;

use validator::ValidateEmail;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UserDraft};
use crate::repositories::UserRepository;

/// Field reported when the unique-email check fails.
pub const UNIQUE_EMAIL_FIELD: &str = "email";

/// Message reported when the unique-email check fails.
pub const UNIQUE_EMAIL_MESSAGE: &str = "That email is already used, please use a unique email";

/// Validates submitted user data before it reaches the repository.
#[derive(Clone)]
pub struct UserValidator {
    users: UserRepository,
}

impl UserValidator {
    /// Creates a new UserValidator backed by the given repository.
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Validates a submitted user and produces the insertable record.
    ///
    /// Field checks run first and report every violation together. The
    /// unique-email lookup only runs once all fields are well formed.
    ///
    /// # Arguments
    /// * `draft` - The raw submitted fields
    /// * `id` - The target row id on update, used to rule out a conflict
    ///   with the record itself; `None` on create
    pub async fn validate(&self, draft: &UserDraft, id: Option<i64>) -> AppResult<NewUser> {
        let new_user = check_fields(draft).map_err(|violations| AppError::FieldViolations {
            violations,
        })?;

        if self.email_already_exists(&new_user.email, id).await? {
            return Err(AppError::unique_conflict(
                UNIQUE_EMAIL_FIELD,
                UNIQUE_EMAIL_MESSAGE,
            ));
        }

        Ok(new_user)
    }

    /// Two-step uniqueness check: look the email up, then rule out the case
    /// where the match is the record being updated.
    ///
    /// The second fetch goes by id and compares emails; only when the stored
    /// record already carries the submitted email is the "conflict" the
    /// record itself. A false positive on update must not occur.
    async fn email_already_exists(&self, email: &str, id: Option<i64>) -> AppResult<bool> {
        let candidate = self.users.find_by_email(email).await?;

        if candidate.is_none() {
            return Ok(false);
        }

        if let Some(id) = id {
            if let Some(with_id) = self.users.find_by_id(id).await? {
                if with_id.email == email {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}

/// Runs every field-constraint check, returning the validated record or the
/// full violation map.
fn check_fields(draft: &UserDraft) -> Result<NewUser, BTreeMap<String, String>> {
    let mut violations = BTreeMap::new();

    super::check_name(draft.name.as_deref(), &mut violations);
    check_email(draft.email.as_deref(), &mut violations);
    super::check_phone_number(draft.phone_number.as_deref(), &mut violations);

    match (&draft.name, &draft.email, &draft.phone_number) {
        (Some(name), Some(email), Some(phone_number)) if violations.is_empty() => Ok(NewUser {
            name: name.clone(),
            email: email.clone(),
            phone_number: phone_number.clone(),
        }),
        _ => Err(violations),
    }
}

fn check_email(value: Option<&str>, violations: &mut BTreeMap<String, String>) {
    match value {
        None => {
            violations.insert("email".to_string(), "Email is required".to_string());
        }
        Some(email) => {
            if !email.validate_email() {
                violations.insert(
                    "email".to_string(),
                    "The email address must be in the format of name@domain.com".to_string(),
                );
            }
        }
    }
}
