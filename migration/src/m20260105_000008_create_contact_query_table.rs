use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactQuery::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactQuery::Id))
                    .col(string_len(ContactQuery::Name, 100))
                    .col(string_len(ContactQuery::Mobile, 15))
                    .col(string_len_null(ContactQuery::Email, 100))
                    .col(text_null(ContactQuery::Message))
                    .col(string_len(ContactQuery::Status, 20).default("new"))
                    .col(
                        timestamp_with_time_zone(ContactQuery::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactQuery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactQuery {
    Table,
    Id,
    Name,
    Mobile,
    Email,
    Message,
    Status,
    CreatedAt,
}
