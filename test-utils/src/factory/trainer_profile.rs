//! Trainer profile factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a trainer profile for an existing user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User the profile belongs to; the profile takes the user's name
pub async fn create_trainer_profile(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<entity::trainer_profile::Model, DbErr> {
    entity::trainer_profile::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        name: ActiveValue::Set(user.name.clone()),
        specialization: ActiveValue::Set(Some("Strength".to_string())),
        bio: ActiveValue::Set(None),
        experience_years: ActiveValue::Set(Some(3)),
        phone: ActiveValue::Set(None),
        certifications: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        updated_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
