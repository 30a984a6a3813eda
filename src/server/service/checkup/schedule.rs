//! Fitness checkup recurrence.
//!
//! Members are due for a checkup every `CHECKUP_INTERVAL_DAYS` days, counted from their
//! enrollment date (membership start, or the day the record was created). Once a checkup
//! has been marked done the cycle restarts from that day.
//!
//! Every function takes `today` explicitly so results are reproducible.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::model::member::CheckupStatusDto;

/// Default number of days between checkups.
pub const CHECKUP_INTERVAL_DAYS: i64 = 21;

/// Number of days ahead a checkup counts as due soon.
pub const DUE_SOON_HORIZON_DAYS: i64 = 2;

/// Computes the next fitness checkup date.
///
/// The base date is `enrollment` when present, otherwise the calendar date of
/// `account_created_at`. Without either there is nothing to schedule from and `None` is
/// returned.
///
/// - With a `last_checkup`, the result is `last_checkup + interval_days` regardless of the
///   base date or `today`.
/// - With a base date in the future, the result is `base + interval_days`.
/// - Otherwise the result is `base + (elapsed / interval_days + 1) * interval_days`, where
///   `elapsed` is the whole number of days from base to `today`. When `elapsed` is an exact
///   multiple of the interval this lands a full cycle after `today` rather than on it.
///
/// A non-positive interval or a date outside chrono's range also yields `None`.
///
/// # Arguments
/// - `enrollment` - Membership start date
/// - `account_created_at` - Record creation time, used when `enrollment` is absent
/// - `last_checkup` - Date the most recent checkup was marked done
/// - `interval_days` - Days between checkups
/// - `today` - Current date
pub fn compute_next_checkup(
    enrollment: Option<NaiveDate>,
    account_created_at: Option<DateTime<Utc>>,
    last_checkup: Option<NaiveDate>,
    interval_days: i64,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if interval_days <= 0 {
        return None;
    }

    let base = enrollment.or_else(|| account_created_at.map(|created| created.date_naive()))?;

    if let Some(last) = last_checkup {
        return add_days(last, interval_days);
    }

    let elapsed = (today - base).num_days();

    if elapsed < 0 {
        return add_days(base, interval_days);
    }

    let completed_cycles = elapsed / interval_days;

    add_days(base, (completed_cycles + 1).checked_mul(interval_days)?)
}

/// Returns true when the checkup falls between today and `horizon_days` from now, inclusive.
///
/// Overdue checkups are not "due soon".
pub fn is_due_soon(next_checkup: Option<NaiveDate>, horizon_days: i64, today: NaiveDate) -> bool {
    match next_checkup {
        Some(next) => {
            let days_until = (next - today).num_days();
            (0..=horizon_days).contains(&days_until)
        }
        None => false,
    }
}

/// Categorical urgency of a member's next checkup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckupStatus {
    NoScheduled,
    Overdue,
    DueToday,
    DueTomorrow,
    DueSoon,
    Upcoming,
}

impl CheckupStatus {
    pub fn into_dto(self) -> CheckupStatusDto {
        match self {
            Self::NoScheduled => CheckupStatusDto::NoScheduled,
            Self::Overdue => CheckupStatusDto::Overdue,
            Self::DueToday => CheckupStatusDto::DueToday,
            Self::DueTomorrow => CheckupStatusDto::DueTomorrow,
            Self::DueSoon => CheckupStatusDto::DueSoon,
            Self::Upcoming => CheckupStatusDto::Upcoming,
        }
    }
}

/// Labels a next checkup date relative to `today`.
pub fn checkup_status(next_checkup: Option<NaiveDate>, today: NaiveDate) -> CheckupStatus {
    let Some(next) = next_checkup else {
        return CheckupStatus::NoScheduled;
    };

    match (next - today).num_days() {
        days if days < 0 => CheckupStatus::Overdue,
        0 => CheckupStatus::DueToday,
        1 => CheckupStatus::DueTomorrow,
        days if days <= DUE_SOON_HORIZON_DAYS => CheckupStatus::DueSoon,
        _ => CheckupStatus::Upcoming,
    }
}

/// Checkup dates after a checkup has been marked done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedCheckup {
    pub last_checkup: NaiveDate,
    pub next_checkup: Option<NaiveDate>,
}

/// Records a checkup done `today` and restarts the cycle from it.
///
/// Only the most recent checkup is kept, so calling this twice on the same day produces the
/// same dates both times.
pub fn mark_done(interval_days: i64, today: NaiveDate) -> CompletedCheckup {
    CompletedCheckup {
        last_checkup: today,
        next_checkup: compute_next_checkup(Some(today), None, Some(today), interval_days, today),
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    #[test]
    fn no_base_date_yields_none() {
        assert_eq!(compute_next_checkup(None, None, None, 21, today()), None);
    }

    #[test]
    fn no_base_date_wins_over_last_checkup() {
        let last = date(2025, 6, 1);
        assert_eq!(compute_next_checkup(None, None, Some(last), 21, today()), None);
    }

    #[test]
    fn last_checkup_restarts_cycle() {
        let last = date(2025, 1, 3);
        let enrollment = date(2024, 11, 20);

        assert_eq!(
            compute_next_checkup(Some(enrollment), None, Some(last), 21, today()),
            Some(date(2025, 1, 24))
        );
    }

    #[test]
    fn last_checkup_rule_holds_for_many_dates() {
        let enrollment = date(2024, 1, 1);
        for offset in -60..60 {
            let last = today() + Duration::days(offset);
            assert_eq!(
                compute_next_checkup(Some(enrollment), None, Some(last), 21, today()),
                Some(last + Duration::days(21))
            );
        }
    }

    #[test]
    fn future_enrollment_schedules_one_interval_after_base() {
        let enrollment = date(2025, 7, 1);

        assert_eq!(
            compute_next_checkup(Some(enrollment), None, None, 21, today()),
            Some(date(2025, 7, 22))
        );
    }

    #[test]
    fn enrollment_twenty_days_ago_is_due_tomorrow() {
        let enrollment = today() - Duration::days(20);

        let next = compute_next_checkup(Some(enrollment), None, None, 21, today());

        assert_eq!(next, Some(today() + Duration::days(1)));
        assert!(is_due_soon(next, DUE_SOON_HORIZON_DAYS, today()));
        assert_eq!(checkup_status(next, today()), CheckupStatus::DueTomorrow);
    }

    #[test]
    fn enrollment_today_schedules_full_interval_ahead() {
        assert_eq!(
            compute_next_checkup(Some(today()), None, None, 21, today()),
            Some(today() + Duration::days(21))
        );
    }

    #[test]
    fn exact_multiple_skips_a_full_cycle_past_today() {
        let enrollment = today() - Duration::days(42);

        assert_eq!(
            compute_next_checkup(Some(enrollment), None, None, 21, today()),
            Some(today() + Duration::days(21))
        );
    }

    #[test]
    fn falls_back_to_account_creation_date() {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 5, 23, 30, 0).unwrap();

        assert_eq!(
            compute_next_checkup(None, Some(created_at), None, 21, today()),
            Some(date(2025, 6, 26))
        );
    }

    #[test]
    fn enrollment_preferred_over_account_creation() {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let enrollment = date(2025, 6, 10);

        assert_eq!(
            compute_next_checkup(Some(enrollment), Some(created_at), None, 21, today()),
            Some(date(2025, 7, 1))
        );
    }

    #[test]
    fn non_positive_interval_yields_none() {
        assert_eq!(compute_next_checkup(Some(today()), None, None, 0, today()), None);
        assert_eq!(compute_next_checkup(Some(today()), None, None, -7, today()), None);
    }

    #[test]
    fn result_stays_within_one_interval_and_on_cycle() {
        let interval = 21;
        for back in 0..200 {
            let enrollment = today() - Duration::days(back);
            let next = compute_next_checkup(Some(enrollment), None, None, interval, today())
                .unwrap();

            assert!(next > today() - Duration::days(interval));
            assert!(next <= today() + Duration::days(interval));
            assert_eq!((next - enrollment).num_days() % interval, 0);
        }
    }

    #[test]
    fn honours_custom_interval() {
        let enrollment = today() - Duration::days(10);

        assert_eq!(
            compute_next_checkup(Some(enrollment), None, None, 7, today()),
            Some(today() + Duration::days(4))
        );
    }

    #[test]
    fn status_labels_by_days_until() {
        let cases = [
            (None, CheckupStatus::NoScheduled),
            (Some(-1), CheckupStatus::Overdue),
            (Some(0), CheckupStatus::DueToday),
            (Some(1), CheckupStatus::DueTomorrow),
            (Some(2), CheckupStatus::DueSoon),
            (Some(3), CheckupStatus::Upcoming),
        ];

        for (offset, expected) in cases {
            let next = offset.map(|days| today() + Duration::days(days));
            assert_eq!(checkup_status(next, today()), expected, "offset {:?}", offset);
        }
    }

    #[test]
    fn due_soon_matches_status_labels() {
        for offset in -5..10 {
            let next = Some(today() + Duration::days(offset));
            let status = checkup_status(next, today());
            let expected = matches!(
                status,
                CheckupStatus::DueToday | CheckupStatus::DueTomorrow | CheckupStatus::DueSoon
            );

            assert_eq!(
                is_due_soon(next, DUE_SOON_HORIZON_DAYS, today()),
                expected,
                "offset {}",
                offset
            );
        }

        assert!(!is_due_soon(None, DUE_SOON_HORIZON_DAYS, today()));
    }

    #[test]
    fn mark_done_twice_same_day_is_stable() {
        let first = mark_done(21, today());
        let second = mark_done(21, today());

        assert_eq!(first, second);
        assert_eq!(first.last_checkup, today());
        assert_eq!(first.next_checkup, Some(today() + Duration::days(21)));
    }
}
