//! Workout log repository.
//!
//! Every read and write is scoped to the owning user; a row belonging to someone else is
//! indistinguishable from a missing one.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::workout::{CreateWorkoutParams, UpdateWorkoutParams, Workout};

pub struct WorkoutRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateWorkoutParams) -> Result<Workout, DbErr> {
        let entity = entity::workout::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            date: ActiveValue::Set(params.date),
            duration: ActiveValue::Set(params.duration),
            calories: ActiveValue::Set(params.calories),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Workout::from_entity(entity))
    }

    /// Gets all of a user's workouts, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Workout>, DbErr> {
        let entities = entity::prelude::Workout::find()
            .filter(entity::workout::Column::UserId.eq(user_id))
            .order_by_desc(entity::workout::Column::CreatedAt)
            .order_by_desc(entity::workout::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Workout::from_entity).collect())
    }

    pub async fn find_for_user(&self, id: i32, user_id: i32) -> Result<Option<Workout>, DbErr> {
        let entity = Self::find_owned(id, user_id).one(self.db).await?;

        Ok(entity.map(Workout::from_entity))
    }

    /// Applies a partial update to one of the user's workouts.
    ///
    /// # Returns
    /// - `Ok(Some(Workout))` - The updated workout
    /// - `Ok(None)` - No such workout for this user
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        params: UpdateWorkoutParams,
    ) -> Result<Option<Workout>, DbErr> {
        let Some(entity) = Self::find_owned(id, user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::workout::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(date) = params.date {
            active.date = ActiveValue::Set(Some(date));
        }
        if let Some(duration) = params.duration {
            active.duration = ActiveValue::Set(Some(duration));
        }
        if let Some(calories) = params.calories {
            active.calories = ActiveValue::Set(Some(calories));
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(Workout::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Workout::delete_many()
            .filter(entity::workout::Column::Id.eq(id))
            .filter(entity::workout::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn find_owned(id: i32, user_id: i32) -> sea_orm::Select<entity::prelude::Workout> {
        entity::prelude::Workout::find_by_id(id).filter(entity::workout::Column::UserId.eq(user_id))
    }
}
