//! User domain models and parameters.
//!
//! Users authenticate with email and password and carry a role deciding which parts of
//! the API they may use. New registrations stay pending until an admin approves them.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};

use crate::model::user::{AccountStatusDto, UserDto, UserRoleDto};

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Trainer,
    Receptionist,
    Member,
}

impl Role {
    pub fn into_entity(self) -> UserRole {
        match self {
            Self::Admin => UserRole::Admin,
            Self::Trainer => UserRole::Trainer,
            Self::Receptionist => UserRole::Receptionist,
            Self::Member => UserRole::Member,
        }
    }

    pub fn from_entity(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Trainer => Self::Trainer,
            UserRole::Receptionist => Self::Receptionist,
            UserRole::Member => Self::Member,
        }
    }

    pub fn into_dto(self) -> UserRoleDto {
        match self {
            Self::Admin => UserRoleDto::Admin,
            Self::Trainer => UserRoleDto::Trainer,
            Self::Receptionist => UserRoleDto::Receptionist,
            Self::Member => UserRoleDto::Member,
        }
    }

    pub fn from_dto(role: UserRoleDto) -> Self {
        match role {
            UserRoleDto::Admin => Self::Admin,
            UserRoleDto::Trainer => Self::Trainer,
            UserRoleDto::Receptionist => Self::Receptionist,
            UserRoleDto::Member => Self::Member,
        }
    }
}

/// Approval state of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn into_entity(self) -> AccountStatus {
        match self {
            Self::Pending => AccountStatus::Pending,
            Self::Approved => AccountStatus::Approved,
            Self::Rejected => AccountStatus::Rejected,
        }
    }

    pub fn from_entity(status: AccountStatus) -> Self {
        match status {
            AccountStatus::Pending => Self::Pending,
            AccountStatus::Approved => Self::Approved,
            AccountStatus::Rejected => Self::Rejected,
        }
    }

    pub fn into_dto(self) -> AccountStatusDto {
        match self {
            Self::Pending => AccountStatusDto::Pending,
            Self::Approved => AccountStatusDto::Approved,
            Self::Rejected => AccountStatusDto::Rejected,
        }
    }
}

/// Application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// bcrypt hash of the user's password; never leaves the server.
    pub password_hash: String,
    pub role: Role,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.into_dto(),
            status: self.status.into_dto(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_entity(entity.role),
            status: ApprovalStatus::from_entity(entity.status),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }
}

/// Parameters for creating a user from plaintext credentials.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Parameters for inserting a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct InsertUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub status: ApprovalStatus,
}
