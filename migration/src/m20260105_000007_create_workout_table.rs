use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workout::Table)
                    .if_not_exists()
                    .col(pk_auto(Workout::Id))
                    .col(integer(Workout::UserId))
                    .col(string_len(Workout::Name, 255))
                    .col(text_null(Workout::Description))
                    .col(date_null(Workout::Date))
                    .col(integer_null(Workout::Duration))
                    .col(integer_null(Workout::Calories))
                    .col(text_null(Workout::Notes))
                    .col(
                        timestamp_with_time_zone(Workout::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Workout::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_user_id")
                            .from(Workout::Table, Workout::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workout {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Date,
    Duration,
    Calories,
    Notes,
    CreatedAt,
    UpdatedAt,
}
