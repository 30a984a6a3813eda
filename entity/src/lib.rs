//! SeaORM entity definitions for every table managed by the `migration` crate.

pub mod prelude;

pub mod contact_query;
pub mod member;
pub mod member_membership;
pub mod membership_plan;
pub mod sea_orm_active_enums;
pub mod trainer_attendance;
pub mod trainer_profile;
pub mod user;
pub mod workout;
