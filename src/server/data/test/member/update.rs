use super::*;

/// Tests that a partial update only touches the supplied fields.
///
/// Expected: Ok(Some) with name changed and phone untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberFactory::new(db)
        .name("Before")
        .phone("9000000002")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .update(
            member.id,
            UpdateMemberParams {
                name: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.phone, "9000000002");

    Ok(())
}

/// Tests that the service can clear the next checkup through an update.
///
/// Expected: Ok(Some) with next checkup date removed
#[tokio::test]
async fn writes_explicit_next_checkup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberFactory::new(db)
        .next_checkup(Some(date(2025, 2, 1)))
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .update(
            member.id,
            UpdateMemberParams {
                next_fitness_checkup_date: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.next_fitness_checkup_date.is_none());

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo.update(42, UpdateMemberParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
