//! SeaORM entities for the Roastmap database schema.

pub mod prelude;

pub mod account;
pub mod favorite_venue;
pub mod review;
