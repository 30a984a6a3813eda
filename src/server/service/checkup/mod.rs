//! Fitness checkup scheduling and the member-facing operations built on it.
//!
//! The date arithmetic lives in [`schedule`] and performs no I/O. `CheckupService` loads
//! members, applies the schedule with an explicit `today` and persists the result.

pub mod schedule;

#[cfg(test)]
mod test;

use chrono::{Days, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::Member,
    service::checkup::schedule::{compute_next_checkup, DUE_SOON_HORIZON_DAYS},
};

pub struct CheckupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets members whose next checkup is overdue or due within the due-soon horizon.
    ///
    /// # Arguments
    /// - `today` - Current date
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - Members ordered by next checkup date, earliest first
    /// - `Err(AppError)` - Database error
    pub async fn due(&self, today: NaiveDate) -> Result<Vec<Member>, AppError> {
        let cutoff = today
            .checked_add_days(Days::new(DUE_SOON_HORIZON_DAYS as u64))
            .unwrap_or(NaiveDate::MAX);

        let members = MemberRepository::new(self.db).get_due_by(cutoff).await?;

        Ok(members)
    }

    /// Records a checkup done today and schedules the next one a full interval later.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member with both checkup dates updated
    /// - `Err(AppError::NotFound)` - No member with that ID
    pub async fn mark_done(
        &self,
        member_id: i32,
        interval_days: i64,
        today: NaiveDate,
    ) -> Result<Member, AppError> {
        let completed = schedule::mark_done(interval_days, today);

        let member = MemberRepository::new(self.db)
            .set_checkup_dates(
                member_id,
                Some(completed.last_checkup),
                completed.next_checkup,
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))?;

        tracing::info!(
            "Fitness checkup done for member {}, next due {:?}",
            member.id,
            member.next_fitness_checkup_date
        );

        Ok(member)
    }

    /// Recomputes the member's next checkup from their current dates and stores it.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member with the recomputed next date
    /// - `Err(AppError::NotFound)` - No member with that ID
    pub async fn recalculate(
        &self,
        member_id: i32,
        interval_days: i64,
        today: NaiveDate,
    ) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        let member = repo
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))?;

        let next = next_checkup_for(&member, interval_days, today);

        let member = repo
            .set_checkup_dates(member.id, member.last_fitness_checkup_date, next)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))?;

        Ok(member)
    }

    /// Stores a next checkup date for every member that has none yet.
    ///
    /// Members without any usable base date stay unscheduled.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of members that received a date
    /// - `Err(AppError)` - Database error
    pub async fn backfill_missing(
        &self,
        interval_days: i64,
        today: NaiveDate,
    ) -> Result<usize, AppError> {
        let repo = MemberRepository::new(self.db);
        let mut scheduled = 0;

        for member in repo.get_without_next_checkup().await? {
            let Some(next) = next_checkup_for(&member, interval_days, today) else {
                continue;
            };

            repo.set_checkup_dates(member.id, member.last_fitness_checkup_date, Some(next))
                .await?;
            scheduled += 1;
        }

        Ok(scheduled)
    }
}

/// Applies the checkup schedule to a member's stored dates.
pub fn next_checkup_for(member: &Member, interval_days: i64, today: NaiveDate) -> Option<NaiveDate> {
    compute_next_checkup(
        member.membership_start,
        Some(member.created_at),
        member.last_fitness_checkup_date,
        interval_days,
        today,
    )
}
