//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate.

/// Type alias for an account database model.
///
/// # Fields (from `entity::account::Model`)
/// - `id` - Primary key, returned to the client as `userId`
/// - `username` - Unique display name chosen at registration
/// - `firebase_uid` - Unique Firebase UID the account is looked up by
/// - `created_at` - Timestamp when the account was registered
pub type AccountModel = entity::account::Model;

/// Type alias for a favorite venue database model.
///
/// Unique per (`account_id`, `venue_id`); removed together with the owning account.
pub type FavoriteVenueModel = entity::favorite_venue::Model;

/// Type alias for a review database model.
pub type ReviewModel = entity::review::Model;
