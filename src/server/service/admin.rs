//! Account approval and role management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{ApprovalStatus, Role, User},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets accounts waiting for approval, oldest first.
    pub async fn pending_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_pending().await?;

        Ok(users)
    }

    /// Approves an account so it can log in.
    ///
    /// # Returns
    /// - `Ok(User)` - The approved user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn approve(&self, user_id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_status(user_id, ApprovalStatus::Approved)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        tracing::info!("Approved user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Changes an account's role.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn set_role(&self, user_id: i32, role: Role) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_role(user_id, role)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        tracing::info!("Set role of user {} to {:?}", user.id, role);

        Ok(user)
    }

    /// Rejects an account by deleting it.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn reject(&self, user_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(user_id).await? {
            return Err(user_not_found(user_id));
        }

        tracing::info!("Rejected and deleted user {}", user_id);

        Ok(())
    }
}

fn user_not_found(user_id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", user_id))
}
