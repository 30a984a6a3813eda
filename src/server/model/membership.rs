//! Member membership assignment models.

use chrono::{Duration, NaiveDate};

use crate::model::membership::{MembershipDto, MembershipPreviewDto};

/// Last day of a membership starting on `start_date` and lasting `duration_days`.
///
/// Returns `None` when the result would fall outside the supported date range.
pub fn membership_end_date(start_date: NaiveDate, duration_days: i32) -> Option<NaiveDate> {
    start_date.checked_add_signed(Duration::try_days(i64::from(duration_days))?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberMembership {
    pub id: i32,
    pub member_id: i32,
    pub plan_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl MemberMembership {
    pub fn from_entity(entity: entity::member_membership::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            plan_id: entity.plan_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }

    pub fn into_dto(self) -> MembershipDto {
        MembershipDto {
            id: self.id,
            member_id: self.member_id,
            plan_id: self.plan_id,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// What an assignment would look like, without persisting it.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipPreview {
    pub member_id: i32,
    pub member_name: String,
    pub plan_id: i32,
    pub plan_name: String,
    pub duration_days: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl MembershipPreview {
    pub fn into_dto(self) -> MembershipPreviewDto {
        MembershipPreviewDto {
            member_id: self.member_id,
            member_name: self.member_name,
            plan_id: self.plan_id,
            plan_name: self.plan_name,
            duration_days: self.duration_days,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssignMembershipParams {
    pub member_id: i32,
    pub plan_id: i32,
    pub start_date: NaiveDate,
}
