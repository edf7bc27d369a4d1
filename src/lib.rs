//! Albums API Library
//!
//! A small REST service exposing CRUD operations over the `albums` table,
//! split into domain types, Postgres repositories and the axum API layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
