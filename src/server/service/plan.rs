//! Membership plan catalogue.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::plan::PlanRepository,
    error::AppError,
    model::plan::{CreatePlanParams, MembershipPlan, UpdatePlanParams, PLAN_NAME_MAX_LEN},
};

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePlanParams) -> Result<MembershipPlan, AppError> {
        validate(
            Some(&params.name),
            Some(params.price),
            Some(params.discount),
            Some(params.duration_days),
        )?;

        let plan = PlanRepository::new(self.db).create(params).await?;

        Ok(plan)
    }

    pub async fn get_all(&self) -> Result<Vec<MembershipPlan>, AppError> {
        let plans = PlanRepository::new(self.db).get_all().await?;

        Ok(plans)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MembershipPlan, AppError> {
        PlanRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| plan_not_found(id))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdatePlanParams,
    ) -> Result<MembershipPlan, AppError> {
        validate(
            params.name.as_deref(),
            params.price,
            params.discount,
            params.duration_days,
        )?;

        PlanRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| plan_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PlanRepository::new(self.db).delete(id).await? {
            return Err(plan_not_found(id));
        }

        Ok(())
    }
}

fn validate(
    name: Option<&str>,
    price: Option<f64>,
    discount: Option<f64>,
    duration_days: Option<i32>,
) -> Result<(), AppError> {
    if let Some(name) = name {
        if name.trim().is_empty() || name.chars().count() > PLAN_NAME_MAX_LEN {
            return Err(AppError::BadRequest(format!(
                "Plan name must be 1 to {} characters",
                PLAN_NAME_MAX_LEN
            )));
        }
    }
    if price.is_some_and(|price| price < 0.0) {
        return Err(AppError::BadRequest("Price must not be negative".to_string()));
    }
    if discount.is_some_and(|discount| !(0.0..=100.0).contains(&discount)) {
        return Err(AppError::BadRequest(
            "Discount must be between 0 and 100".to_string(),
        ));
    }
    if duration_days.is_some_and(|days| days <= 0) {
        return Err(AppError::BadRequest(
            "Duration must be a positive number of days".to_string(),
        ));
    }

    Ok(())
}

fn plan_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Plan {} not found", id))
}
