//! Trainer attendance domain models.

use chrono::{DateTime, Utc};

use crate::{model::attendance::AttendanceDto, server::error::attendance::AttendanceError};

/// One check-in/check-out cycle for a trainer.
///
/// A session is open until `check_out` is set, after which it is closed for good.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSession {
    pub id: i32,
    pub trainer_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl AttendanceSession {
    pub fn from_entity(entity: entity::trainer_attendance::Model) -> Self {
        Self {
            id: entity.id,
            trainer_id: entity.trainer_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            trainer_id: self.trainer_id,
            check_in: self.check_in,
            check_out: self.check_out,
            created_at: self.created_at,
        }
    }

    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }

    /// Closes the session at `now`.
    ///
    /// # Returns
    /// - `Ok(AttendanceSession)` - The closed session
    /// - `Err(AttendanceError::Conflict)` - The session was already closed
    pub fn close(mut self, now: DateTime<Utc>) -> Result<Self, AttendanceError> {
        if !self.is_open() {
            return Err(AttendanceError::Conflict(
                "Attendance session already checked out".to_string(),
            ));
        }

        self.check_out = Some(now);
        Ok(self)
    }
}
