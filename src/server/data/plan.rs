//! Membership plan repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::plan::{final_price, CreatePlanParams, MembershipPlan, UpdatePlanParams};

pub struct PlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an active plan, storing the discounted price alongside the list price.
    pub async fn create(&self, params: CreatePlanParams) -> Result<MembershipPlan, DbErr> {
        let entity = entity::membership_plan::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            discount: ActiveValue::Set(params.discount),
            final_price: ActiveValue::Set(final_price(params.price, params.discount)),
            duration_days: ActiveValue::Set(params.duration_days),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MembershipPlan::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<MembershipPlan>, DbErr> {
        let entities = entity::prelude::MembershipPlan::find()
            .order_by_asc(entity::membership_plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MembershipPlan::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MembershipPlan>, DbErr> {
        let entity = entity::prelude::MembershipPlan::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MembershipPlan::from_entity))
    }

    /// Applies a partial update and recomputes the final price from the merged values.
    ///
    /// # Returns
    /// - `Ok(Some(MembershipPlan))` - The updated plan
    /// - `Ok(None)` - No plan with that ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePlanParams,
    ) -> Result<Option<MembershipPlan>, DbErr> {
        let Some(entity) = entity::prelude::MembershipPlan::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let price = params.price.unwrap_or(entity.price);
        let discount = params.discount.unwrap_or(entity.discount);

        let mut active: entity::membership_plan::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(duration_days) = params.duration_days {
            active.duration_days = ActiveValue::Set(duration_days);
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.price = ActiveValue::Set(price);
        active.discount = ActiveValue::Set(discount);
        active.final_price = ActiveValue::Set(final_price(price, discount));
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(MembershipPlan::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MembershipPlan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
