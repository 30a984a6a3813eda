//! Member factory for creating test gym members.

use crate::factory::helpers::next_id;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .membership_start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .next_checkup(None)
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    phone: String,
    membership_start: Option<NaiveDate>,
    last_checkup: Option<NaiveDate>,
    next_checkup: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {id}"`
    /// - phone: unique ten digit number
    /// - no enrollment, last or next checkup dates
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Member {}", id),
            phone: format!("9{:09}", id),
            membership_start: None,
            last_checkup: None,
            next_checkup: None,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn membership_start(mut self, date: NaiveDate) -> Self {
        self.membership_start = Some(date);
        self
    }

    pub fn last_checkup(mut self, date: NaiveDate) -> Self {
        self.last_checkup = Some(date);
        self
    }

    pub fn next_checkup(mut self, date: Option<NaiveDate>) -> Self {
        self.next_checkup = date;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// The next checkup date is stored exactly as configured; no schedule is derived.
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            age: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            membership_type: ActiveValue::Set(None),
            membership_start: ActiveValue::Set(self.membership_start),
            membership_end: ActiveValue::Set(None),
            last_fitness_checkup_date: ActiveValue::Set(self.last_checkup),
            next_fitness_checkup_date: ActiveValue::Set(self.next_checkup),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
