use crate::server::data::attendance::AttendanceRepository;
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, SqlErr};
use test_utils::{
    builder::TestBuilder,
    factory::{self, trainer_attendance::TrainerAttendanceFactory},
};

mod create;
mod find_open;
mod get_by_trainer_between;
mod get_page;
