//! Background cron jobs.

pub mod checkup_reminders;
