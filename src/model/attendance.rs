use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AttendanceActionDto {
    /// Trainer to check in or out. Trainers may omit it; front desk staff must supply it.
    #[serde(default)]
    pub trainer_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub trainer_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AttendancePageQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AttendanceRangeQuery {
    pub trainer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
