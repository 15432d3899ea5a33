use diesel::prelude::*;

/// Restaurant model for reading from database
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub postcode: String,
}

/// Validated restaurant fields for INSERT and full-record UPDATE operations.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct NewRestaurant {
    pub name: String,
    pub phone_number: String,
    pub postcode: String,
}

/// Raw restaurant fields as submitted by a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDraft {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub postcode: Option<String>,
}
