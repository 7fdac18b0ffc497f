pub use super::account::Entity as Account;
pub use super::favorite_venue::Entity as FavoriteVenue;
pub use super::review::Entity as Review;
