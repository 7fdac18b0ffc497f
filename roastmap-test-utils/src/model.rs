//! Database model type aliases for test utilities, matching those in the main crate.

pub type AccountModel = entity::account::Model;

pub type FavoriteVenueModel = entity::favorite_venue::Model;

pub type ReviewModel = entity::review::Model;
