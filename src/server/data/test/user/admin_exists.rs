use super::*;

/// Tests detecting when an admin user exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).role(UserRole::Admin).build().await?;

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when no users exist at all (first start).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}

/// Tests that staff roles other than admin do not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_staff_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).role(UserRole::Trainer).build().await?;
    UserFactory::new(db).role(UserRole::Receptionist).build().await?;
    UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(!result.unwrap());

    Ok(())
}
