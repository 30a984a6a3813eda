pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_member_table;
mod m20260105_000003_create_membership_plan_table;
mod m20260105_000004_create_member_membership_table;
mod m20260105_000005_create_trainer_profile_table;
mod m20260105_000006_create_trainer_attendance_table;
mod m20260105_000007_create_workout_table;
mod m20260105_000008_create_contact_query_table;

pub use m20260105_000006_create_trainer_attendance_table::OPEN_SESSION_INDEX_SQL;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_member_table::Migration),
            Box::new(m20260105_000003_create_membership_plan_table::Migration),
            Box::new(m20260105_000004_create_member_membership_table::Migration),
            Box::new(m20260105_000005_create_trainer_profile_table::Migration),
            Box::new(m20260105_000006_create_trainer_attendance_table::Migration),
            Box::new(m20260105_000007_create_workout_table::Migration),
            Box::new(m20260105_000008_create_contact_query_table::Migration),
        ]
    }
}
