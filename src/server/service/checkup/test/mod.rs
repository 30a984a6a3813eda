use crate::server::{error::AppError, service::checkup::CheckupService};
use chrono::{NaiveDate, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory::member::MemberFactory};

mod backfill_missing;
mod due;
mod mark_done;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
