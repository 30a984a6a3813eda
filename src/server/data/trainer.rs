//! Trainer profile repository.
//!
//! Trainer accounts live in the user table; the profile table holds the descriptive fields.
//! Operations that touch both run inside a single transaction so a failed profile insert
//! never leaves a half-created trainer behind.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    trainer::{TrainerDetails, TrainerProfile, UpdateTrainerParams},
    user::{ApprovalStatus, InsertUserParam, Role, User},
};

pub struct TrainerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trainer user and their profile in one transaction.
    ///
    /// # Arguments
    /// - `user` - The user row to insert; its role and status should already be trainer/approved
    /// - `details` - Descriptive profile fields
    ///
    /// # Returns
    /// - `Ok(TrainerProfile)` - The created profile joined with its user
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create_with_user(
        &self,
        user: InsertUserParam,
        details: TrainerDetails,
    ) -> Result<TrainerProfile, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            password_hash: ActiveValue::Set(user.password_hash),
            role: ActiveValue::Set(user.role.into_entity()),
            status: ActiveValue::Set(user.status.into_entity()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let profile = Self::profile_model(&user, details)
            .insert(&txn)
            .await?;

        txn.commit().await?;

        Ok(TrainerProfile::from_entity(profile, user))
    }

    /// Promotes an existing user to an approved trainer and creates their profile.
    ///
    /// # Returns
    /// - `Ok(TrainerProfile)` - The created profile
    /// - `Err(DbErr)` - Database error, including a unique violation if a profile exists
    pub async fn attach(
        &self,
        user: &User,
        details: TrainerDetails,
    ) -> Result<TrainerProfile, DbErr> {
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user.id),
            role: ActiveValue::Set(Role::Trainer.into_entity()),
            status: ActiveValue::Set(ApprovalStatus::Approved.into_entity()),
            updated_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        let profile = Self::profile_model(&user, details)
            .insert(&txn)
            .await?;

        txn.commit().await?;

        Ok(TrainerProfile::from_entity(profile, user))
    }

    /// Checks whether a user already has a trainer profile.
    pub async fn profile_exists_for_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let profile = entity::prelude::TrainerProfile::find()
            .filter(entity::trainer_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(profile.is_some())
    }

    /// Gets all trainer profiles ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<TrainerProfile>, DbErr> {
        let rows = entity::prelude::TrainerProfile::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::trainer_profile::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(profile, user)| Self::join(profile, user))
            .collect()
    }

    /// Gets a trainer profile by profile ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<TrainerProfile>, DbErr> {
        let row = entity::prelude::TrainerProfile::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(|(profile, user)| Self::join(profile, user))
            .transpose()
    }

    /// Applies a partial update to a trainer profile.
    ///
    /// # Returns
    /// - `Ok(Some(TrainerProfile))` - The updated profile
    /// - `Ok(None)` - No profile with that ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTrainerParams,
    ) -> Result<Option<TrainerProfile>, DbErr> {
        let Some((profile, user)) = entity::prelude::TrainerProfile::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::trainer_profile::ActiveModel = profile.into();

        if let Some(specialization) = params.specialization {
            active.specialization = ActiveValue::Set(Some(specialization));
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(experience_years) = params.experience_years {
            active.experience_years = ActiveValue::Set(Some(experience_years));
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(certifications) = params.certifications {
            active.certifications = ActiveValue::Set(Some(certifications));
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let profile = active.update(self.db).await?;

        Self::join(profile, user).map(Some)
    }

    /// Deletes a trainer profile, optionally demoting the user back to member.
    ///
    /// # Returns
    /// - `Ok(true)` - Profile deleted
    /// - `Ok(false)` - No profile with that ID
    pub async fn delete(&self, id: i32, demote_user: bool) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(profile) = entity::prelude::TrainerProfile::find_by_id(id)
            .one(&txn)
            .await?
        else {
            return Ok(false);
        };

        entity::prelude::TrainerProfile::delete_by_id(profile.id)
            .exec(&txn)
            .await?;

        if demote_user {
            entity::user::ActiveModel {
                id: ActiveValue::Unchanged(profile.user_id),
                role: ActiveValue::Set(Role::Member.into_entity()),
                updated_at: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            }
            .update(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(true)
    }

    fn profile_model(
        user: &entity::user::Model,
        details: TrainerDetails,
    ) -> entity::trainer_profile::ActiveModel {
        entity::trainer_profile::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            name: ActiveValue::Set(user.name.clone()),
            specialization: ActiveValue::Set(details.specialization),
            bio: ActiveValue::Set(details.bio),
            experience_years: ActiveValue::Set(details.experience_years),
            phone: ActiveValue::Set(details.phone),
            certifications: ActiveValue::Set(details.certifications),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
    }

    fn join(
        profile: entity::trainer_profile::Model,
        user: Option<entity::user::Model>,
    ) -> Result<TrainerProfile, DbErr> {
        let user = user.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "User {} for trainer profile {} not found",
                profile.user_id, profile.id
            ))
        })?;

        Ok(TrainerProfile::from_entity(profile, user))
    }
}
