pub mod api;
pub mod attendance;
pub mod member;
pub mod membership;
pub mod plan;
pub mod query;
pub mod trainer;
pub mod user;
pub mod workout;
