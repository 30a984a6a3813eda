use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MembershipPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(MembershipPlan::Id))
                    .col(string_len(MembershipPlan::Name, 50))
                    .col(string_len_null(MembershipPlan::Description, 255))
                    .col(double(MembershipPlan::Price))
                    .col(double(MembershipPlan::Discount).default(0.0))
                    .col(double(MembershipPlan::FinalPrice))
                    .col(integer(MembershipPlan::DurationDays))
                    .col(boolean(MembershipPlan::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(MembershipPlan::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(MembershipPlan::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MembershipPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MembershipPlan {
    Table,
    Id,
    Name,
    Description,
    Price,
    Discount,
    FinalPrice,
    DurationDays,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
