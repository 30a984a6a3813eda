//! HTTP request handlers.
//!
//! Each module exposes axum handlers annotated with `utoipa::path` and a tag constant
//! used to group its endpoints in the generated API documentation.

pub mod admin;
pub mod attendance;
pub mod auth;
pub mod checkup;
pub mod member;
pub mod membership;
pub mod plan;
pub mod query;
pub mod trainer;
pub mod workout;
