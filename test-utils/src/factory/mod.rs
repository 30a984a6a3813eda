//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let trainer = factory::create_trainer(&db).await?;
//!     let session = factory::create_open_session(&db, trainer.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::{AccountStatus, UserRole};
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("front@desk.test")
//!     .role(UserRole::Receptionist)
//!     .status(AccountStatus::Pending)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users of any role and approval status
//! - `member` - Gym members with optional enrollment and checkup dates
//! - `membership_plan` - Purchasable plans
//! - `trainer_attendance` - Open or closed attendance sessions
//! - `trainer_profile` - Trainer profiles linked to users
//! - `helpers` - Unique ID generation

pub mod helpers;
pub mod member;
pub mod membership_plan;
pub mod trainer_attendance;
pub mod trainer_profile;
pub mod user;

pub use member::create_member;
pub use membership_plan::create_plan;
pub use trainer_attendance::{create_closed_session, create_open_session};
pub use trainer_profile::create_trainer_profile;
pub use user::{create_admin, create_receptionist, create_trainer, create_user};
