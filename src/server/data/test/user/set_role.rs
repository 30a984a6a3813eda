use super::*;

/// Tests changing a member into a receptionist.
///
/// Expected: Ok(Some) with the new role persisted
#[tokio::test]
async fn changes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    repo.set_role(user.id, Role::Receptionist).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.role, Role::Receptionist);

    Ok(())
}
