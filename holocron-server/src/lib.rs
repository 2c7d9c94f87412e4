//! holocron-server: Star Wars catalog over HTTP
//!
//! Serves people, planets and users from a relational store and lets each
//! user keep a list of favorite people and planets. An `/admin` surface
//! allows direct editing of all four tables.

pub mod db;
pub mod http;
pub mod models;

pub use db::{connect, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
