use super::*;

/// Tests looking up a user by email.
///
/// Expected: Ok(Some) for a known address, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_exact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .email("coach@gym.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("coach@gym.test").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    let missing = repo.find_by_email("nobody@gym.test").await?;
    assert!(missing.is_none());

    Ok(())
}
