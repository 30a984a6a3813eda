use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_member_table::Member,
    m20260105_000003_create_membership_plan_table::MembershipPlan,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberMembership::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberMembership::Id))
                    .col(integer(MemberMembership::MemberId))
                    .col(integer(MemberMembership::PlanId))
                    .col(date(MemberMembership::StartDate))
                    .col(date(MemberMembership::EndDate))
                    .col(
                        timestamp_with_time_zone(MemberMembership::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_membership_member_id")
                            .from(MemberMembership::Table, MemberMembership::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_membership_plan_id")
                            .from(MemberMembership::Table, MemberMembership::PlanId)
                            .to(MembershipPlan::Table, MembershipPlan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberMembership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberMembership {
    Table,
    Id,
    MemberId,
    PlanId,
    StartDate,
    EndDate,
    CreatedAt,
}
