use diesel::prelude::*;

use super::{Restaurant, User};

/// Review model for reading from database.
///
/// Carries only the foreign keys; API responses embed the full User and
/// Restaurant, so review lookups join the referenced rows in as a
/// [`ReviewRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub review: String,
    pub rating: i32,
}

/// A review together with the user and restaurant it references.
pub type ReviewRecord = (Review, User, Restaurant);

/// Validated review fields for INSERT and full-record UPDATE operations.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub user_id: i64,
    pub restaurant_id: i64,
    pub review: String,
    pub rating: i32,
}

/// Raw review fields as submitted by a client, before validation.
///
/// The referenced user and restaurant arrive as embedded objects; only their
/// ids are kept here. `rating` defaults to zero when the client omits it,
/// matching how an absent numeric field has always been treated.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub user_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub review: Option<String>,
    pub rating: i32,
}
