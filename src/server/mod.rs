//! Server application core modules.
//!
//! This module contains the HTTP routing, configuration, startup, persistence and push
//! notification plumbing for the Roastmap backend.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
