//! Personal workout log. Every operation is scoped to the calling user.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::workout::WorkoutRepository,
    error::AppError,
    model::workout::{CreateWorkoutParams, UpdateWorkoutParams, Workout},
};

pub struct WorkoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateWorkoutParams) -> Result<Workout, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest("Workout name is required".to_string()));
        }

        let workout = WorkoutRepository::new(self.db).create(params).await?;

        Ok(workout)
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Workout>, AppError> {
        let workouts = WorkoutRepository::new(self.db).get_for_user(user_id).await?;

        Ok(workouts)
    }

    pub async fn get(&self, id: i32, user_id: i32) -> Result<Workout, AppError> {
        WorkoutRepository::new(self.db)
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| workout_not_found(id))
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        params: UpdateWorkoutParams,
    ) -> Result<Workout, AppError> {
        WorkoutRepository::new(self.db)
            .update(id, user_id, params)
            .await?
            .ok_or_else(|| workout_not_found(id))
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        if !WorkoutRepository::new(self.db).delete(id, user_id).await? {
            return Err(workout_not_found(id));
        }

        Ok(())
    }
}

fn workout_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Workout {} not found", id))
}
