//! Email and password authentication.
//!
//! Passwords are hashed with bcrypt on the blocking thread pool so hashing never stalls the
//! async runtime.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{ApprovalStatus, CreateUserParam, InsertUserParam, Role, User},
};

/// Hashes a plaintext password with bcrypt's default cost.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
            .await??;

    Ok(hash)
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

    Ok(valid)
}

/// Normalises an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Service for registration, login and admin seeding.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// New accounts are members awaiting admin approval and cannot log in until approved.
    ///
    /// # Returns
    /// - `Ok(User)` - The pending user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError)` - Hashing or database error
    pub async fn register(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user = self
            .create_user(param, Role::Member, ApprovalStatus::Pending)
            .await?;

        tracing::info!("Registered user {} ({}), awaiting approval", user.id, user.email);

        Ok(user)
    }

    /// Verifies credentials and returns the user to store in the session.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and the account is approved
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountNotApproved)` - Account pending or rejected
    pub async fn login(&self, email: &str, password: String) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_approved() {
            return Err(AuthError::AccountNotApproved(user.id).into());
        }

        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user)
    }

    /// Checks if any admin account exists.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let exists = UserRepository::new(self.db).admin_exists().await?;

        Ok(exists)
    }

    /// Creates an approved admin account.
    ///
    /// Used at startup to seed the first admin from configuration.
    pub async fn create_admin(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user = self
            .create_user(param, Role::Admin, ApprovalStatus::Approved)
            .await?;

        tracing::info!("Created admin account {} ({})", user.id, user.email);

        Ok(user)
    }

    async fn create_user(
        &self,
        param: CreateUserParam,
        role: Role,
        status: ApprovalStatus,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let email = normalize_email(&param.email);

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let password_hash = hash_password(param.password).await?;

        let user = repo
            .create(InsertUserParam {
                name: param.name,
                email,
                password_hash,
                role,
                status,
            })
            .await?;

        Ok(user)
    }
}
