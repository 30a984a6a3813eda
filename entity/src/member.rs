use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub membership_type: Option<String>,
    pub membership_start: Option<Date>,
    pub membership_end: Option<Date>,
    pub last_fitness_checkup_date: Option<Date>,
    pub next_fitness_checkup_date: Option<Date>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::member_membership::Entity")]
    MemberMembership,
}

impl Related<super::member_membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberMembership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
