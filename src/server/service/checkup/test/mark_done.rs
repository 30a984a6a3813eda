use super::*;

/// Tests marking a checkup done.
///
/// Expected: last checkup = today, next checkup = today + interval
#[tokio::test]
async fn restarts_cycle_from_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let today = date(2025, 4, 1);

    let member = MemberFactory::new(db)
        .membership_start(date(2025, 1, 1))
        .next_checkup(Some(date(2025, 3, 26)))
        .build()
        .await?;

    let updated = CheckupService::new(db).mark_done(member.id, 21, today).await?;

    assert_eq!(updated.last_fitness_checkup_date, Some(today));
    assert_eq!(updated.next_fitness_checkup_date, Some(date(2025, 4, 22)));

    Ok(())
}

/// Tests that marking done twice on the same day gives the same dates.
///
/// Expected: identical checkup dates after both calls
#[tokio::test]
async fn same_outcome_when_repeated_same_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let today = date(2025, 4, 1);

    let member = MemberFactory::new(db).build().await?;
    let service = CheckupService::new(db);

    let first = service.mark_done(member.id, 21, today).await?;
    let second = service.mark_done(member.id, 21, today).await?;

    assert_eq!(
        first.last_fitness_checkup_date,
        second.last_fitness_checkup_date
    );
    assert_eq!(
        first.next_fitness_checkup_date,
        second.next_fitness_checkup_date
    );

    Ok(())
}

/// Tests marking done for an unknown member.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_member_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CheckupService::new(db)
        .mark_done(404, 21, date(2025, 4, 1))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
