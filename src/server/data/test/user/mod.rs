use crate::server::{
    data::user::UserRepository,
    model::user::{ApprovalStatus, InsertUserParam, Role},
};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod admin_exists;
mod create;
mod find_by_email;
mod get_pending;
mod set_role;
mod set_status;
