//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories inside transactions, and translate storage
//! outcomes into domain errors. Database failures leave a service tagged with the operation
//! that failed. The notification service wraps the injected push client.

pub mod account;
pub mod favorite;
pub mod notification;
pub mod review;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::{user::UserError, Error};

/// Maps a unique constraint violation raised by the database to the conflict `conflict`
/// picks from the violation message.
///
/// Covers the window between an existence check and the insert when two requests race.
fn conflict_on_unique_violation(
    err: DbErr,
    conflict: impl FnOnce(&str) -> UserError,
) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(violation)) => conflict(&violation).into(),
        _ => err.into(),
    }
}
