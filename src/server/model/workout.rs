//! Workout log domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::workout::{CreateWorkoutDto, UpdateWorkoutDto, WorkoutDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub calories: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Workout {
    pub fn from_entity(entity: entity::workout::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            description: entity.description,
            date: entity.date,
            duration: entity.duration,
            calories: entity.calories,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> WorkoutDto {
        WorkoutDto {
            id: self.id,
            name: self.name,
            description: self.description,
            date: self.date,
            duration: self.duration,
            calories: self.calories,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkoutParams {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub calories: Option<i32>,
    pub notes: Option<String>,
}

impl CreateWorkoutParams {
    pub fn from_dto(user_id: i32, dto: CreateWorkoutDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            description: dto.description,
            date: dto.date,
            duration: dto.duration,
            calories: dto.calories,
            notes: dto.notes,
        }
    }
}

/// Partial workout update scoped to the owning user.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkoutParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub calories: Option<i32>,
    pub notes: Option<String>,
}

impl UpdateWorkoutParams {
    pub fn from_dto(dto: UpdateWorkoutDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            date: dto.date,
            duration: dto.duration,
            calories: dto.calories,
            notes: dto.notes,
        }
    }
}
