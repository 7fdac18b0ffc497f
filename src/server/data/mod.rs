//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run against
//! a pooled connection or inside a transaction.

pub mod account;
pub mod favorite_venue;
pub mod review;
