use super::*;

/// Tests the half-open check-in window used by date range reports.
///
/// Verifies that a session exactly at the window end is excluded, one at the
/// window start is included, and another trainer's sessions never appear.
///
/// Expected: Ok with sessions in ascending check-in order
#[tokio::test]
async fn returns_sessions_within_window_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    let other = factory::create_trainer(db).await?;

    let from = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2025, 7, 3, 0, 0, 0).unwrap();

    let second = TrainerAttendanceFactory::new(db, trainer.id)
        .check_in(from + Duration::hours(30))
        .check_out(from + Duration::hours(34))
        .build()
        .await?;
    let first = TrainerAttendanceFactory::new(db, trainer.id)
        .check_in(from)
        .check_out(from + Duration::hours(4))
        .build()
        .await?;
    TrainerAttendanceFactory::new(db, trainer.id)
        .check_in(until)
        .check_out(until + Duration::hours(4))
        .build()
        .await?;
    TrainerAttendanceFactory::new(db, other.id)
        .check_in(from + Duration::hours(2))
        .check_out(from + Duration::hours(3))
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let sessions = repo.get_by_trainer_between(trainer.id, from, until).await?;

    let ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
