//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping business logic separated from
//! database and API concerns.

pub mod attendance;
pub mod member;
pub mod membership;
pub mod plan;
pub mod query;
pub mod trainer;
pub mod user;
pub mod workout;
