use crate::server::{
    data::plan::PlanRepository,
    model::plan::{CreatePlanParams, UpdatePlanParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::membership_plan::MembershipPlanFactory};

mod create;
mod update;
