//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories never apply business rules such as checkup scheduling or role checks; the
//! service layer decides what to write.

pub mod attendance;
pub mod member;
pub mod membership;
pub mod plan;
pub mod query;
pub mod trainer;
pub mod user;
pub mod workout;

#[cfg(test)]
mod test;
