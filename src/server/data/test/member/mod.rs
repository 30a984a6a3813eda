use crate::server::{
    data::member::MemberRepository,
    model::member::{CreateMemberParams, InsertMemberParams, UpdateMemberParams},
};
use chrono::{NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::member::MemberFactory};

mod create;
mod get_due_by;
mod get_without_next_checkup;
mod set_checkup_dates;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
