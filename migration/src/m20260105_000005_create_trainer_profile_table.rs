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
                    .table(TrainerProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainerProfile::Id))
                    .col(integer_uniq(TrainerProfile::UserId))
                    .col(string_len(TrainerProfile::Name, 100))
                    .col(string_len_null(TrainerProfile::Specialization, 255))
                    .col(text_null(TrainerProfile::Bio))
                    .col(integer_null(TrainerProfile::ExperienceYears))
                    .col(string_len_null(TrainerProfile::Phone, 30))
                    .col(text_null(TrainerProfile::Certifications))
                    .col(
                        timestamp_with_time_zone(TrainerProfile::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(TrainerProfile::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainer_profile_user_id")
                            .from(TrainerProfile::Table, TrainerProfile::UserId)
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
            .drop_table(Table::drop().table(TrainerProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainerProfile {
    Table,
    Id,
    UserId,
    Name,
    Specialization,
    Bio,
    ExperienceYears,
    Phone,
    Certifications,
    CreatedAt,
    UpdatedAt,
}
