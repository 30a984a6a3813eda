use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "membership_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub discount: f64,
    pub final_price: f64,
    pub duration_days: i32,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
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
