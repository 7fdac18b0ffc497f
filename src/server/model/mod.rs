//! Server application models: shared state and database model aliases.

pub mod app;
pub mod db;
