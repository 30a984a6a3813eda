//! Trainer attendance repository.
//!
//! At most one open session per trainer is enforced by a partial unique index; an insert
//! that would create a second one fails with a unique constraint violation which the
//! service reports as a conflict.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::attendance::AttendanceSession;

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new session for the trainer.
    ///
    /// # Arguments
    /// - `trainer_id` - ID of the trainer user
    /// - `check_in` - Check-in time, also used as the row's creation time
    ///
    /// # Returns
    /// - `Ok(AttendanceSession)` - The new open session
    /// - `Err(DbErr)` - Database error; a unique violation means a session is already open
    pub async fn create(
        &self,
        trainer_id: i32,
        check_in: DateTime<Utc>,
    ) -> Result<AttendanceSession, DbErr> {
        let entity = entity::trainer_attendance::ActiveModel {
            trainer_id: ActiveValue::Set(trainer_id),
            check_in: ActiveValue::Set(check_in),
            check_out: ActiveValue::Set(None),
            created_at: ActiveValue::Set(check_in),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AttendanceSession::from_entity(entity))
    }

    /// Finds the trainer's most recent open session.
    ///
    /// Ordered by check-in time so the newest wins should more than one ever be open.
    pub async fn find_open(&self, trainer_id: i32) -> Result<Option<AttendanceSession>, DbErr> {
        let entity = entity::prelude::TrainerAttendance::find()
            .filter(entity::trainer_attendance::Column::TrainerId.eq(trainer_id))
            .filter(entity::trainer_attendance::Column::CheckOut.is_null())
            .order_by_desc(entity::trainer_attendance::Column::CheckIn)
            .one(self.db)
            .await?;

        Ok(entity.map(AttendanceSession::from_entity))
    }

    /// Persists the check-out time of a closed session.
    pub async fn save_check_out(
        &self,
        session: &AttendanceSession,
    ) -> Result<AttendanceSession, DbErr> {
        let entity = entity::trainer_attendance::ActiveModel {
            id: ActiveValue::Unchanged(session.id),
            check_out: ActiveValue::Set(session.check_out),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(AttendanceSession::from_entity(entity))
    }

    /// Gets a page of all sessions, newest check-in first.
    pub async fn get_page(&self, skip: u64, limit: u64) -> Result<Vec<AttendanceSession>, DbErr> {
        let entities = entity::prelude::TrainerAttendance::find()
            .order_by_desc(entity::trainer_attendance::Column::CheckIn)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(AttendanceSession::from_entity)
            .collect())
    }

    /// Gets every session of one trainer, newest check-in first.
    pub async fn get_by_trainer(&self, trainer_id: i32) -> Result<Vec<AttendanceSession>, DbErr> {
        let entities = entity::prelude::TrainerAttendance::find()
            .filter(entity::trainer_attendance::Column::TrainerId.eq(trainer_id))
            .order_by_desc(entity::trainer_attendance::Column::CheckIn)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(AttendanceSession::from_entity)
            .collect())
    }

    /// Gets sessions checked in at or after `since`, newest first.
    pub async fn get_since(&self, since: DateTime<Utc>) -> Result<Vec<AttendanceSession>, DbErr> {
        let entities = entity::prelude::TrainerAttendance::find()
            .filter(entity::trainer_attendance::Column::CheckIn.gte(since))
            .order_by_desc(entity::trainer_attendance::Column::CheckIn)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(AttendanceSession::from_entity)
            .collect())
    }

    /// Gets one trainer's sessions checked in within `[from, until)`, oldest first.
    pub async fn get_by_trainer_between(
        &self,
        trainer_id: i32,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<AttendanceSession>, DbErr> {
        let entities = entity::prelude::TrainerAttendance::find()
            .filter(entity::trainer_attendance::Column::TrainerId.eq(trainer_id))
            .filter(entity::trainer_attendance::Column::CheckIn.gte(from))
            .filter(entity::trainer_attendance::Column::CheckIn.lt(until))
            .order_by_asc(entity::trainer_attendance::Column::CheckIn)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(AttendanceSession::from_entity)
            .collect())
    }
}
