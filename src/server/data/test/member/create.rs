use super::*;

/// Tests inserting a member with a precomputed next checkup date.
///
/// Verifies that the repository stores the schedule it is given and leaves the
/// last checkup empty.
///
/// Expected: Ok with both dates as inserted
#[tokio::test]
async fn stores_member_with_next_checkup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(InsertMemberParams {
            member: CreateMemberParams {
                name: "Ravi".to_string(),
                phone: "9000000001".to_string(),
                age: Some(29),
                gender: None,
                address: None,
                membership_type: Some("monthly".to_string()),
                membership_start: Some(date(2025, 1, 1)),
                membership_end: None,
            },
            next_fitness_checkup_date: Some(date(2025, 1, 22)),
            created_at: Utc::now(),
        })
        .await?;

    assert_eq!(member.phone, "9000000001");
    assert_eq!(member.next_fitness_checkup_date, Some(date(2025, 1, 22)));
    assert!(member.last_fitness_checkup_date.is_none());

    let found = repo.find_by_phone("9000000001").await?;
    assert_eq!(found.map(|m| m.id), Some(member.id));

    Ok(())
}
