//! Database models for all domain entities.
//!
//! Each entity comes in three shapes: the persisted row (`User`), the
//! validated insert/changeset (`NewUser`), and the pre-validation draft
//! (`UserDraft`) carrying the raw optional fields a client submitted.

mod restaurant;
mod review;
mod user;

pub use restaurant::{NewRestaurant, Restaurant, RestaurantDraft};
pub use review::{NewReview, Review, ReviewDraft, ReviewRecord};
pub use user::{NewUser, User, UserDraft};
