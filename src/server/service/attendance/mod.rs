//! Trainer attendance: check-in, check-out and attendance reports.
//!
//! Actor resolution is delegated to [`guard`]. The at-most-one-open-session rule is checked
//! before inserting and backed by a partial unique index, so a concurrent check-in that slips
//! past the check still surfaces as a conflict.

pub mod guard;

#[cfg(test)]
mod test;

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{attendance::AttendanceRepository, user::UserRepository},
    error::{attendance::AttendanceError, AppError},
    model::{attendance::AttendanceSession, user::User},
    util::time::{day_start, day_window},
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens an attendance session for the resolved trainer.
    ///
    /// # Arguments
    /// - `actor` - Authenticated user making the request
    /// - `requested_trainer_id` - Trainer named in the request body, if any
    /// - `now` - Check-in time
    ///
    /// # Returns
    /// - `Ok(AttendanceSession)` - The new open session
    /// - `Err(AppError::AttendanceErr)` - Actor resolution failed or a session is already open
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn check_in(
        &self,
        actor: &User,
        requested_trainer_id: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<AttendanceSession, AppError> {
        let trainer_id = self.resolve_trainer(actor, requested_trainer_id).await?;
        let repo = AttendanceRepository::new(self.db);

        if repo.find_open(trainer_id).await?.is_some() {
            return Err(already_checked_in(trainer_id).into());
        }

        let session = match repo.create(trainer_id, now).await {
            Ok(session) => session,
            Err(err) if is_unique_violation(&err) => {
                return Err(already_checked_in(trainer_id).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            "Trainer {} checked in (session {}, recorded by user {})",
            trainer_id,
            session.id,
            actor.id
        );

        Ok(session)
    }

    /// Closes the resolved trainer's most recent open session.
    ///
    /// # Returns
    /// - `Ok(AttendanceSession)` - The closed session
    /// - `Err(AppError::AttendanceErr)` - Actor resolution failed or no session is open
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn check_out(
        &self,
        actor: &User,
        requested_trainer_id: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<AttendanceSession, AppError> {
        let trainer_id = self.resolve_trainer(actor, requested_trainer_id).await?;
        let repo = AttendanceRepository::new(self.db);

        let open = repo.find_open(trainer_id).await?.ok_or_else(|| {
            AttendanceError::Conflict(format!(
                "Trainer {} has no open attendance session",
                trainer_id
            ))
        })?;

        let closed = open.close(now)?;
        let session = repo.save_check_out(&closed).await?;

        tracing::info!(
            "Trainer {} checked out (session {}, recorded by user {})",
            trainer_id,
            session.id,
            actor.id
        );

        Ok(session)
    }

    /// Gets a page of all attendance sessions, newest first.
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<AttendanceSession>, AppError> {
        let sessions = AttendanceRepository::new(self.db)
            .get_page(skip, limit)
            .await?;

        Ok(sessions)
    }

    /// Gets one trainer's full attendance history, newest first.
    pub async fn for_trainer(&self, trainer_id: i32) -> Result<Vec<AttendanceSession>, AppError> {
        let sessions = AttendanceRepository::new(self.db)
            .get_by_trainer(trainer_id)
            .await?;

        Ok(sessions)
    }

    /// Gets every session checked in since UTC midnight of `now`, newest first.
    pub async fn today(&self, now: DateTime<Utc>) -> Result<Vec<AttendanceSession>, AppError> {
        let sessions = AttendanceRepository::new(self.db)
            .get_since(day_start(now.date_naive()))
            .await?;

        Ok(sessions)
    }

    /// Gets a trainer's sessions checked in within an inclusive range of UTC days, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<AttendanceSession>)` - Matching sessions
    /// - `Err(AppError::BadRequest)` - `start_date` is after `end_date`
    pub async fn by_trainer(
        &self,
        trainer_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceSession>, AppError> {
        if start_date > end_date {
            return Err(AppError::BadRequest(
                "start_date must not be after end_date".to_string(),
            ));
        }

        let (from, until) = day_window(start_date, end_date)
            .ok_or_else(|| AppError::BadRequest("end_date is out of range".to_string()))?;

        let sessions = AttendanceRepository::new(self.db)
            .get_by_trainer_between(trainer_id, from, until)
            .await?;

        Ok(sessions)
    }

    async fn resolve_trainer(
        &self,
        actor: &User,
        requested_trainer_id: Option<i32>,
    ) -> Result<i32, AppError> {
        let trainer_id = guard::resolve_target(actor.role, actor.id, requested_trainer_id)?;

        let target = UserRepository::new(self.db).find_by_id(trainer_id).await?;
        guard::ensure_trainer(trainer_id, target.as_ref())?;

        Ok(trainer_id)
    }
}

fn already_checked_in(trainer_id: i32) -> AttendanceError {
    AttendanceError::Conflict(format!(
        "Trainer {} already has an open attendance session",
        trainer_id
    ))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
