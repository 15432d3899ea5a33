use diesel::prelude::*;

/// User model for reading from database
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Validated user fields for INSERT and full-record UPDATE operations.
///
/// Produced only by the user validator, so a value of this type is known to
/// satisfy every field constraint.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Raw user fields as submitted by a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}
