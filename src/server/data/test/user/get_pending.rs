use super::*;

/// Tests listing users awaiting approval.
///
/// Verifies that approved and rejected accounts are excluded.
///
/// Expected: Ok with only the pending user
#[tokio::test]
async fn returns_only_pending_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = UserFactory::new(db)
        .status(AccountStatus::Pending)
        .build()
        .await?;
    UserFactory::new(db).build().await?;
    UserFactory::new(db)
        .status(AccountStatus::Rejected)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.get_pending().await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, pending.id);
    assert_eq!(result[0].status, ApprovalStatus::Pending);

    Ok(())
}
