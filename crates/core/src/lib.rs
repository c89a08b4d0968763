//! Labtrack domain crate.
//!
//! Boundary DTOs with their validation rules, the role enumeration, and the
//! audit entry model. This crate has no I/O; the HTTP host lives in
//! `labtrack-api`.

pub mod audit;
pub mod error;
pub mod lab;
pub mod roles;
pub mod types;
pub mod user;
pub mod validation;
