use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string_len(Member::Name, 50))
                    .col(string_len_uniq(Member::Phone, 15))
                    .col(integer_null(Member::Age))
                    .col(string_len_null(Member::Gender, 10))
                    .col(string_len_null(Member::Address, 255))
                    .col(string_len_null(Member::MembershipType, 50))
                    .col(date_null(Member::MembershipStart))
                    .col(date_null(Member::MembershipEnd))
                    .col(date_null(Member::LastFitnessCheckupDate))
                    .col(date_null(Member::NextFitnessCheckupDate))
                    .col(
                        timestamp_with_time_zone(Member::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_next_fitness_checkup_date")
                    .table(Member::Table)
                    .col(Member::NextFitnessCheckupDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    Name,
    Phone,
    Age,
    Gender,
    Address,
    MembershipType,
    MembershipStart,
    MembershipEnd,
    LastFitnessCheckupDate,
    NextFitnessCheckupDate,
    CreatedAt,
}
