//! Member membership repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::membership::MemberMembership;

pub struct MembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a plan assignment for a member.
    pub async fn create(
        &self,
        member_id: i32,
        plan_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<MemberMembership, DbErr> {
        let entity = entity::member_membership::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            plan_id: ActiveValue::Set(plan_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MemberMembership::from_entity(entity))
    }

    /// Gets a member's plan history, most recent start first.
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<MemberMembership>, DbErr> {
        let entities = entity::prelude::MemberMembership::find()
            .filter(entity::member_membership::Column::MemberId.eq(member_id))
            .order_by_desc(entity::member_membership::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MemberMembership::from_entity)
            .collect())
    }
}
