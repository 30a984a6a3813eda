use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::checkup::CheckupService};

/// Starts the fitness checkup reminder scheduler
///
/// This scheduler runs daily at 06:00 UTC and:
/// - Schedules a next checkup for members that don't have one yet
/// - Logs members whose checkup is overdue or due within the reminder horizon
///
/// # Arguments
/// - `db`: Database connection
/// - `interval_days`: Days between fitness checkups
pub async fn start_scheduler(db: DatabaseConnection, interval_days: i64) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 0 6 * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            let today = Utc::now().date_naive();
            if let Err(e) = process_checkup_reminders(&db, interval_days, today).await {
                tracing::error!("Error processing checkup reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Checkup reminder scheduler started");

    Ok(())
}

/// Outcome of a single reminder run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReminderSummary {
    /// Members that had no next checkup date and were given one
    pub scheduled: usize,
    /// Members whose checkup falls between today and the reminder horizon
    pub due_soon: usize,
    /// Members whose checkup date has already passed
    pub overdue: usize,
}

/// Backfills missing checkup dates then logs every member needing attention.
pub async fn process_checkup_reminders(
    db: &DatabaseConnection,
    interval_days: i64,
    today: NaiveDate,
) -> Result<ReminderSummary, AppError> {
    let service = CheckupService::new(db);
    let mut summary = ReminderSummary {
        scheduled: service.backfill_missing(interval_days, today).await?,
        ..Default::default()
    };

    if summary.scheduled > 0 {
        tracing::info!("Scheduled first checkup for {} members", summary.scheduled);
    }

    for member in service.due(today).await? {
        let Some(next) = member.next_fitness_checkup_date else {
            continue;
        };

        if next < today {
            summary.overdue += 1;
            tracing::warn!(
                "Checkup overdue for member {} ({}) since {}",
                member.id,
                member.name,
                next
            );
        } else {
            summary.due_soon += 1;
            tracing::info!(
                "Checkup due for member {} ({}) on {}",
                member.id,
                member.name,
                next
            );
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use test_utils::{builder::TestBuilder, factory::member::MemberFactory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Tests that a run backfills missing dates and splits due members by overdue.
    ///
    /// Verifies that a member without a next date is scheduled, and that members with
    /// a past date count as overdue while those inside the horizon count as due soon.
    ///
    /// Expected: Ok with one scheduled, one overdue and one due soon
    #[tokio::test]
    async fn counts_backfilled_overdue_and_due_soon_members() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Member)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let today = date(2026, 3, 10);

        MemberFactory::new(db)
            .membership_start(date(2026, 3, 1))
            .next_checkup(None)
            .build()
            .await?;
        MemberFactory::new(db)
            .next_checkup(Some(today.checked_sub_days(Days::new(3)).unwrap()))
            .build()
            .await?;
        MemberFactory::new(db)
            .next_checkup(Some(today.checked_add_days(Days::new(1)).unwrap()))
            .build()
            .await?;
        MemberFactory::new(db)
            .next_checkup(Some(today.checked_add_days(Days::new(30)).unwrap()))
            .build()
            .await?;

        let summary = process_checkup_reminders(db, 90, today).await?;

        assert_eq!(
            summary,
            ReminderSummary {
                scheduled: 1,
                due_soon: 1,
                overdue: 1,
            }
        );

        Ok(())
    }
}
