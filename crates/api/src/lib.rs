//! Labtrack API server library.
//!
//! Exposes the building blocks (config, state, error handling, controllers,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod audit_sink;
pub mod auth;
pub mod config;
pub mod context;
pub mod controllers;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
