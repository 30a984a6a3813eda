use super::*;

/// Tests finding members that still need a schedule.
///
/// Expected: Ok with only the unscheduled member
#[tokio::test]
async fn returns_unscheduled_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unscheduled = MemberFactory::new(db).next_checkup(None).build().await?;
    MemberFactory::new(db)
        .next_checkup(Some(date(2025, 4, 1)))
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let result = repo.get_without_next_checkup().await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, unscheduled.id);

    Ok(())
}
