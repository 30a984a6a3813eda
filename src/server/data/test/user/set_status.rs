use super::*;

/// Tests approving a pending user.
///
/// Expected: Ok(Some) with status approved and updated_at set
#[tokio::test]
async fn approves_pending_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .status(AccountStatus::Pending)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .set_status(user.id, ApprovalStatus::Approved)
        .await?
        .unwrap();

    assert!(updated.is_approved());
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests updating the status of a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_status(404, ApprovalStatus::Rejected).await?;

    assert!(result.is_none());

    Ok(())
}
