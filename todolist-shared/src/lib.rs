//! # Todolist Shared Library
//!
//! This crate contains shared types, database access, and authentication
//! logic used by the todolist API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their queries
//! - `auth`: Password hashing, token issuance, and request authentication
//! - `db`: Connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the todolist shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
