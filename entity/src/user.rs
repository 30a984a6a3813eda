use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AccountStatus, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trainer_attendance::Entity")]
    TrainerAttendance,
    #[sea_orm(has_one = "super::trainer_profile::Entity")]
    TrainerProfile,
    #[sea_orm(has_many = "super::workout::Entity")]
    Workout,
}

impl Related<super::trainer_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainerAttendance.def()
    }
}

impl Related<super::trainer_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainerProfile.def()
    }
}

impl Related<super::workout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workout.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
