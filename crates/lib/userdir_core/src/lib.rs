//! # userdir_core
//!
//! Core domain logic for Userdir: the in-memory user directory, token
//! issuance and request authentication.

pub mod auth;
pub mod directory;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
