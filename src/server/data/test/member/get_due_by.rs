use super::*;

/// Tests selecting members whose checkup falls on or before a cutoff.
///
/// Verifies that overdue and boundary dates are included, later dates and
/// unscheduled members are excluded, and results are ordered by date.
///
/// Expected: Ok with the overdue member first, then the boundary member
#[tokio::test]
async fn returns_due_and_overdue_in_date_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boundary = MemberFactory::new(db)
        .next_checkup(Some(date(2025, 3, 12)))
        .build()
        .await?;
    let overdue = MemberFactory::new(db)
        .next_checkup(Some(date(2025, 3, 1)))
        .build()
        .await?;
    MemberFactory::new(db)
        .next_checkup(Some(date(2025, 3, 13)))
        .build()
        .await?;
    MemberFactory::new(db).next_checkup(None).build().await?;

    let repo = MemberRepository::new(db);
    let due = repo.get_due_by(date(2025, 3, 12)).await?;

    let ids: Vec<i32> = due.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![overdue.id, boundary.id]);

    Ok(())
}
