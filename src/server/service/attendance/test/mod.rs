use crate::server::{
    error::{attendance::AttendanceError, AppError},
    model::user::User,
    service::attendance::AttendanceService,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{self, trainer_attendance::TrainerAttendanceFactory},
};

mod check_out;
