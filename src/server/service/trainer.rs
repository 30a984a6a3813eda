//! Trainer accounts and profiles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{trainer::TrainerRepository, user::UserRepository},
    error::AppError,
    model::{
        trainer::{AttachTrainerParams, CreateTrainerParams, TrainerProfile, UpdateTrainerParams},
        user::{ApprovalStatus, InsertUserParam, Role},
    },
    service::auth::{hash_password, normalize_email},
};

pub struct TrainerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an approved trainer account together with its profile.
    ///
    /// # Returns
    /// - `Ok(TrainerProfile)` - The new trainer
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn create(&self, params: CreateTrainerParams) -> Result<TrainerProfile, AppError> {
        let email = normalize_email(&params.email);

        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let password_hash = hash_password(params.password).await?;

        let profile = TrainerRepository::new(self.db)
            .create_with_user(
                InsertUserParam {
                    name: params.name,
                    email,
                    password_hash,
                    role: Role::Trainer,
                    status: ApprovalStatus::Approved,
                },
                params.details,
            )
            .await?;

        tracing::info!("Created trainer {} (user {})", profile.id, profile.user_id);

        Ok(profile)
    }

    /// Promotes an existing account to trainer and gives it a profile.
    ///
    /// # Returns
    /// - `Ok(TrainerProfile)` - The new profile
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::BadRequest)` - The user already has a trainer profile
    pub async fn attach(&self, params: AttachTrainerParams) -> Result<TrainerProfile, AppError> {
        let email = normalize_email(&params.user_email);

        let user = UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user with email {}", email)))?;

        let repo = TrainerRepository::new(self.db);

        if repo.profile_exists_for_user(user.id).await? {
            return Err(AppError::BadRequest(
                "User already has a trainer profile".to_string(),
            ));
        }

        let profile = repo.attach(&user, params.details).await?;

        tracing::info!("Promoted user {} to trainer {}", user.id, profile.id);

        Ok(profile)
    }

    pub async fn get_all(&self) -> Result<Vec<TrainerProfile>, AppError> {
        let trainers = TrainerRepository::new(self.db).get_all().await?;

        Ok(trainers)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TrainerProfile, AppError> {
        TrainerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| trainer_not_found(id))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateTrainerParams,
    ) -> Result<TrainerProfile, AppError> {
        TrainerRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| trainer_not_found(id))
    }

    /// Deletes a trainer profile, by default demoting the account back to member.
    pub async fn delete(&self, id: i32, demote_user: bool) -> Result<(), AppError> {
        if !TrainerRepository::new(self.db).delete(id, demote_user).await? {
            return Err(trainer_not_found(id));
        }

        tracing::info!("Deleted trainer {} (demoted: {})", id, demote_user);

        Ok(())
    }
}

fn trainer_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Trainer {} not found", id))
}
