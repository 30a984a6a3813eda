use crate::server::{
    data::trainer::TrainerRepository,
    model::{
        trainer::TrainerDetails,
        user::{ApprovalStatus, InsertUserParam, Role, User},
    },
};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

mod attach;
mod create_with_user;
mod delete;
mod update;
