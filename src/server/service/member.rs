//! Member records and their checkup schedule.

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{CreateMemberParams, InsertMemberParams, Member, UpdateMemberParams},
    service::checkup::{next_checkup_for, schedule::compute_next_checkup},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a member and schedules their first checkup.
    ///
    /// # Arguments
    /// - `params` - Member details
    /// - `interval_days` - Days between checkups
    /// - `today` - Current date
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(AppError::BadRequest)` - Phone number already registered
    pub async fn create(
        &self,
        params: CreateMemberParams,
        interval_days: i64,
        today: NaiveDate,
    ) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        if repo.find_by_phone(&params.phone).await?.is_some() {
            return Err(duplicate_phone());
        }

        let created_at = Utc::now();
        let next = compute_next_checkup(
            params.membership_start,
            Some(created_at),
            None,
            interval_days,
            today,
        );

        let member = repo
            .create(InsertMemberParams {
                member: params,
                next_fitness_checkup_date: next,
                created_at,
            })
            .await?;

        tracing::info!(
            "Created member {} with first checkup {:?}",
            member.id,
            member.next_fitness_checkup_date
        );

        Ok(member)
    }

    /// Gets all members, filling in a missing next checkup for display only.
    pub async fn get_all(&self, interval_days: i64, today: NaiveDate) -> Result<Vec<Member>, AppError> {
        let members = MemberRepository::new(self.db).get_all().await?;

        Ok(members
            .into_iter()
            .map(|member| with_display_schedule(member, interval_days, today))
            .collect())
    }

    /// Gets a member, filling in a missing next checkup for display only.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member found
    /// - `Err(AppError::NotFound)` - No member with that ID
    pub async fn get_by_id(
        &self,
        id: i32,
        interval_days: i64,
        today: NaiveDate,
    ) -> Result<Member, AppError> {
        let member = MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| member_not_found(id))?;

        Ok(with_display_schedule(member, interval_days, today))
    }

    /// Applies a partial update.
    ///
    /// A changed enrollment date reschedules the next checkup from the updated dates.
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::NotFound)` - No member with that ID
    /// - `Err(AppError::BadRequest)` - New phone number belongs to another member
    pub async fn update(
        &self,
        id: i32,
        mut params: UpdateMemberParams,
        interval_days: i64,
        today: NaiveDate,
    ) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| member_not_found(id))?;

        if let Some(phone) = &params.phone {
            if let Some(other) = repo.find_by_phone(phone).await? {
                if other.id != id {
                    return Err(duplicate_phone());
                }
            }
        }

        if let Some(start) = params.membership_start {
            if current.membership_start != Some(start) {
                params.next_fitness_checkup_date = Some(compute_next_checkup(
                    Some(start),
                    Some(current.created_at),
                    current.last_fitness_checkup_date,
                    interval_days,
                    today,
                ));
            }
        }

        let member = repo
            .update(id, params)
            .await?
            .ok_or_else(|| member_not_found(id))?;

        Ok(member)
    }

    /// Deletes a member.
    ///
    /// # Returns
    /// - `Ok(())` - Member deleted
    /// - `Err(AppError::NotFound)` - No member with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MemberRepository::new(self.db).delete(id).await? {
            return Err(member_not_found(id));
        }

        Ok(())
    }
}

fn with_display_schedule(mut member: Member, interval_days: i64, today: NaiveDate) -> Member {
    if member.next_fitness_checkup_date.is_none() {
        member.next_fitness_checkup_date = next_checkup_for(&member, interval_days, today);
    }

    member
}

fn member_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Member {} not found", id))
}

fn duplicate_phone() -> AppError {
    AppError::BadRequest("Phone number already registered".to_string())
}
