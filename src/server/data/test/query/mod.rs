use crate::server::{
    data::query::ContactQueryRepository,
    model::query::{CreateContactQueryParams, QueryStatus},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod lifecycle;
