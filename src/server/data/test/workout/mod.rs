use crate::server::{
    data::workout::WorkoutRepository,
    model::workout::{CreateWorkoutParams, UpdateWorkoutParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod ownership;

fn params(user_id: i32, name: &str) -> CreateWorkoutParams {
    CreateWorkoutParams {
        user_id,
        name: name.to_string(),
        description: None,
        date: None,
        duration: Some(45),
        calories: None,
        notes: None,
    }
}
