//! Membership plan factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating membership plans.
pub struct MembershipPlanFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: f64,
    discount: f64,
    duration_days: i32,
    is_active: bool,
}

impl<'a> MembershipPlanFactory<'a> {
    /// Creates a new factory for a 30 day plan priced at 1000 with no discount.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Plan {}", next_id()),
            price: 1000.0,
            discount: 0.0,
            duration_days: 30,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn duration_days(mut self, days: i32) -> Self {
        self.duration_days = days;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the plan, deriving `final_price` from price and discount.
    pub async fn build(self) -> Result<entity::membership_plan::Model, DbErr> {
        let final_price = self.price * (1.0 - self.discount / 100.0);

        entity::membership_plan::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
            discount: ActiveValue::Set(self.discount),
            final_price: ActiveValue::Set(final_price),
            duration_days: ActiveValue::Set(self.duration_days),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active plan with default values.
pub async fn create_plan(
    db: &DatabaseConnection,
) -> Result<entity::membership_plan::Model, DbErr> {
    MembershipPlanFactory::new(db).build().await
}
