//! Role-based access checks for controllers.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// Access levels required by endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Admins only.
    Admin,
    /// Admins and receptionists.
    FrontDesk,
    /// Admins, receptionists and trainers.
    TrainerAccess,
    /// Trainers only.
    Trainer,
}

impl Permission {
    /// Roles granted this permission.
    pub fn roles(self) -> &'static [Role] {
        match self {
            Self::Admin => &[Role::Admin],
            Self::FrontDesk => &[Role::Admin, Role::Receptionist],
            Self::TrainerAccess => &[Role::Admin, Role::Receptionist, Role::Trainer],
            Self::Trainer => &[Role::Trainer],
        }
    }

    pub fn allows(self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}

/// Loads the session user and checks their permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an approved, logged-in user holding every listed permission.
    ///
    /// An empty list only requires an approved login.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccountNotApproved)` - Account pending or rejected
    /// - `Err(AuthError::AccessDenied)` - Role lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_approved() {
            return Err(AuthError::AccountNotApproved(user_id).into());
        }

        for permission in permissions {
            if !permission.allows(user.role) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!(
                        "User with role {:?} lacks {:?} permission",
                        user.role, permission
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }
}
