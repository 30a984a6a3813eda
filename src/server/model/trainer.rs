//! Trainer profile domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::trainer::{AttachTrainerDto, CreateTrainerDto, TrainerDto, UpdateTrainerDto};

/// Trainer profile joined with the owning user's identity.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerProfile {
    pub id: i32,
    pub user_id: i32,
    pub user_email: String,
    pub user_name: String,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub phone: Option<String>,
    pub certifications: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TrainerProfile {
    /// Builds the profile from its entity and the linked user entity.
    pub fn from_entity(
        profile: entity::trainer_profile::Model,
        user: entity::user::Model,
    ) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            user_email: user.email,
            user_name: user.name,
            specialization: profile.specialization,
            bio: profile.bio,
            experience_years: profile.experience_years,
            phone: profile.phone,
            certifications: profile.certifications,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }

    pub fn into_dto(self) -> TrainerDto {
        TrainerDto {
            id: self.id,
            user_id: self.user_id,
            user_email: self.user_email,
            user_name: self.user_name,
            specialization: self.specialization,
            bio: self.bio,
            experience_years: self.experience_years,
            phone: self.phone,
            certifications: self.certifications,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Descriptive profile fields shared by create, attach and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainerDetails {
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub phone: Option<String>,
    pub certifications: Option<String>,
}

/// Parameters for creating a trainer account and its profile together.
#[derive(Debug, Clone)]
pub struct CreateTrainerParams {
    pub email: String,
    pub name: String,
    pub password: String,
    pub details: TrainerDetails,
}

impl CreateTrainerParams {
    pub fn from_dto(dto: CreateTrainerDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            password: dto.password,
            details: TrainerDetails {
                specialization: dto.specialization,
                bio: dto.bio,
                experience_years: dto.experience_years,
                phone: dto.phone,
                certifications: dto.certifications,
            },
        }
    }
}

/// Parameters for promoting an existing user to trainer.
#[derive(Debug, Clone)]
pub struct AttachTrainerParams {
    pub user_email: String,
    pub details: TrainerDetails,
}

impl AttachTrainerParams {
    pub fn from_dto(dto: AttachTrainerDto) -> Self {
        Self {
            user_email: dto.user_email,
            details: TrainerDetails {
                specialization: dto.specialization,
                bio: dto.bio,
                experience_years: dto.experience_years,
                phone: dto.phone,
                certifications: dto.certifications,
            },
        }
    }
}

/// Partial profile update; `None` fields are left unchanged.
pub type UpdateTrainerParams = TrainerDetails;

impl From<UpdateTrainerDto> for TrainerDetails {
    fn from(dto: UpdateTrainerDto) -> Self {
        Self {
            specialization: dto.specialization,
            bio: dto.bio,
            experience_years: dto.experience_years,
            phone: dto.phone,
            certifications: dto.certifications,
        }
    }
}
