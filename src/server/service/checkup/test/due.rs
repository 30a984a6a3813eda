use super::*;

/// Tests the due list boundary.
///
/// Verifies that members due today, within two days and overdue are returned while a
/// member due in three days is not.
///
/// Expected: Ok with three members, earliest first
#[tokio::test]
async fn includes_overdue_and_two_day_horizon() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let today = date(2025, 3, 10);

    let in_two = MemberFactory::new(db)
        .next_checkup(Some(date(2025, 3, 12)))
        .build()
        .await?;
    let overdue = MemberFactory::new(db)
        .next_checkup(Some(date(2025, 3, 2)))
        .build()
        .await?;
    let due_today = MemberFactory::new(db)
        .next_checkup(Some(today))
        .build()
        .await?;
    MemberFactory::new(db)
        .next_checkup(Some(date(2025, 3, 13)))
        .build()
        .await?;

    let due = CheckupService::new(db).due(today).await?;

    let ids: Vec<i32> = due.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![overdue.id, due_today.id, in_two.id]);

    Ok(())
}
