mod attendance;
mod member;
mod plan;
mod query;
mod trainer;
mod user;
mod workout;
