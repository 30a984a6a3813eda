use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::Role,
};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod require;
