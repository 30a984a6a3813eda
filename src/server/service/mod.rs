//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Checkup scheduling, attendance rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Time**: Receiving "today" and "now" from the caller instead of reading the clock

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
