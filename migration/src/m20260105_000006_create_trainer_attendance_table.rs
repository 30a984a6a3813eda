use sea_orm_migration::{prelude::*, schema::*, sea_orm::ConnectionTrait};

use super::m20260105_000001_create_user_table::User;

/// Partial unique index allowing at most one open (not checked out) session per trainer.
///
/// Kept as raw SQL since it needs a `WHERE` clause; both SQLite and Postgres accept it.
pub const OPEN_SESSION_INDEX_SQL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    ux_trainer_attendance_open_session ON trainer_attendance (trainer_id) \
    WHERE check_out IS NULL";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainerAttendance::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainerAttendance::Id))
                    .col(integer(TrainerAttendance::TrainerId))
                    .col(timestamp_with_time_zone(TrainerAttendance::CheckIn))
                    .col(timestamp_with_time_zone_null(TrainerAttendance::CheckOut))
                    .col(
                        timestamp_with_time_zone(TrainerAttendance::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainer_attendance_trainer_id")
                            .from(TrainerAttendance::Table, TrainerAttendance::TrainerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trainer_attendance_check_in")
                    .table(TrainerAttendance::Table)
                    .col(TrainerAttendance::CheckIn)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(OPEN_SESSION_INDEX_SQL)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainerAttendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainerAttendance {
    Table,
    Id,
    TrainerId,
    CheckIn,
    CheckOut,
    CreatedAt,
}
