use super::*;

/// Tests that only unscheduled members are backfilled.
///
/// The member without an enrollment date falls back to its creation date; the already
/// scheduled member keeps its date.
///
/// Expected: Ok(1) and the unscheduled member scheduled from created_at
#[tokio::test]
async fn schedules_members_without_next_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let today = date(2025, 2, 10);

    let unscheduled = MemberFactory::new(db)
        .created_at(Utc.with_ymd_and_hms(2025, 2, 1, 18, 30, 0).unwrap())
        .next_checkup(None)
        .build()
        .await?;
    let scheduled = MemberFactory::new(db)
        .membership_start(date(2025, 1, 1))
        .next_checkup(Some(date(2025, 2, 11)))
        .build()
        .await?;

    let count = CheckupService::new(db)
        .backfill_missing(21, today)
        .await?;

    assert_eq!(count, 1);

    let repo = crate::server::data::member::MemberRepository::new(db);
    let unscheduled = repo.find_by_id(unscheduled.id).await?.unwrap();
    let scheduled = repo.find_by_id(scheduled.id).await?.unwrap();

    assert_eq!(unscheduled.next_fitness_checkup_date, Some(date(2025, 2, 22)));
    assert_eq!(scheduled.next_fitness_checkup_date, Some(date(2025, 2, 11)));

    Ok(())
}
