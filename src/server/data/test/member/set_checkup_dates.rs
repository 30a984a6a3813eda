use super::*;

/// Tests recording a completed checkup.
///
/// Expected: Ok(Some) with both dates overwritten
#[tokio::test]
async fn overwrites_both_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberFactory::new(db)
        .next_checkup(Some(date(2025, 5, 1)))
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .set_checkup_dates(member.id, Some(date(2025, 5, 2)), Some(date(2025, 5, 23)))
        .await?
        .unwrap();

    assert_eq!(updated.last_fitness_checkup_date, Some(date(2025, 5, 2)));
    assert_eq!(updated.next_fitness_checkup_date, Some(date(2025, 5, 23)));

    Ok(())
}
