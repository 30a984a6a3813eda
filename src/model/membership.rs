use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body shared by the preview and assign endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MembershipRequestDto {
    pub member_id: i32,
    pub plan_id: i32,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipPreviewDto {
    pub member_id: i32,
    pub member_name: String,
    pub plan_id: i32,
    pub plan_name: String,
    pub duration_days: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipDto {
    pub id: i32,
    pub member_id: i32,
    pub plan_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
