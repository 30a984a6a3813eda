//! Trainer attendance factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating attendance sessions for an existing trainer.
pub struct TrainerAttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    trainer_id: i32,
    check_in: DateTime<Utc>,
    check_out: Option<DateTime<Utc>>,
}

impl<'a> TrainerAttendanceFactory<'a> {
    /// Creates a factory for an open session that started now.
    pub fn new(db: &'a DatabaseConnection, trainer_id: i32) -> Self {
        Self {
            db,
            trainer_id,
            check_in: Utc::now(),
            check_out: None,
        }
    }

    pub fn check_in(mut self, check_in: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self
    }

    pub fn check_out(mut self, check_out: DateTime<Utc>) -> Self {
        self.check_out = Some(check_out);
        self
    }

    pub async fn build(self) -> Result<entity::trainer_attendance::Model, DbErr> {
        entity::trainer_attendance::ActiveModel {
            trainer_id: ActiveValue::Set(self.trainer_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            created_at: ActiveValue::Set(self.check_in),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open session for the trainer starting now.
pub async fn create_open_session(
    db: &DatabaseConnection,
    trainer_id: i32,
) -> Result<entity::trainer_attendance::Model, DbErr> {
    TrainerAttendanceFactory::new(db, trainer_id).build().await
}

/// Creates a one hour session for the trainer that ended now.
pub async fn create_closed_session(
    db: &DatabaseConnection,
    trainer_id: i32,
) -> Result<entity::trainer_attendance::Model, DbErr> {
    let now = Utc::now();
    TrainerAttendanceFactory::new(db, trainer_id)
        .check_in(now - Duration::hours(1))
        .check_out(now)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_trainer};

    /// Tests that the partial index rejects a second open session for one trainer.
    #[tokio::test]
    async fn rejects_second_open_session() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_attendance_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let trainer = create_trainer(db).await?;
        create_open_session(db, trainer.id).await?;

        let result = create_open_session(db, trainer.id).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Tests that closed sessions do not count against the open-session index.
    #[tokio::test]
    async fn allows_open_session_alongside_closed_ones() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_attendance_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let trainer = create_trainer(db).await?;
        create_closed_session(db, trainer.id).await?;
        create_closed_session(db, trainer.id).await?;

        let open = create_open_session(db, trainer.id).await?;

        assert!(open.check_out.is_none());

        Ok(())
    }
}
