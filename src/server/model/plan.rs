//! Membership plan domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::plan::{CreatePlanDto, PlanDto, UpdatePlanDto};

/// Longest accepted plan name.
pub const PLAN_NAME_MAX_LEN: usize = 50;

/// Price after applying a percentage discount.
pub fn final_price(price: f64, discount: f64) -> f64 {
    price * (1.0 - discount / 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MembershipPlan {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub discount: f64,
    pub final_price: f64,
    pub duration_days: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MembershipPlan {
    pub fn from_entity(entity: entity::membership_plan::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            discount: entity.discount,
            final_price: entity.final_price,
            duration_days: entity.duration_days,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            discount: self.discount,
            final_price: self.final_price,
            duration_days: self.duration_days,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub discount: f64,
    pub duration_days: i32,
}

impl CreatePlanParams {
    pub fn from_dto(dto: CreatePlanDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            discount: dto.discount,
            duration_days: dto.duration_days,
        }
    }
}

/// Partial plan update; `final_price` is derived by the repository from the merged values.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlanParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub duration_days: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdatePlanParams {
    pub fn from_dto(dto: UpdatePlanDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            discount: dto.discount,
            duration_days: dto.duration_days,
            is_active: dto.is_active,
        }
    }
}
