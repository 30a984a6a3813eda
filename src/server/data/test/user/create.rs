use super::*;

/// Tests inserting a user with a pre-hashed password.
///
/// Verifies that every field of the insert parameters is persisted and that the
/// creation timestamp is populated.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user_with_given_role_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(InsertUserParam {
            name: "Front Desk".to_string(),
            email: "desk@gym.test".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Receptionist,
            status: ApprovalStatus::Approved,
        })
        .await?;

    assert_eq!(user.email, "desk@gym.test");
    assert_eq!(user.role, Role::Receptionist);
    assert_eq!(user.status, ApprovalStatus::Approved);
    assert!(user.updated_at.is_none());

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@gym.test").build().await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(InsertUserParam {
            name: "Second".to_string(),
            email: "taken@gym.test".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Member,
            status: ApprovalStatus::Pending,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
