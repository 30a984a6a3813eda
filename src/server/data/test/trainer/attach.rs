use super::*;

/// Tests promoting a pending member to trainer.
///
/// Verifies that the user becomes an approved trainer and receives a profile.
///
/// Expected: Ok with the user's role and status updated
#[tokio::test]
async fn promotes_user_and_creates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::TrainerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .status(AccountStatus::Pending)
        .build()
        .await?;
    let user = User::from_entity(user);

    let repo = TrainerRepository::new(db);
    let profile = repo.attach(&user, TrainerDetails::default()).await?;

    assert_eq!(profile.user_id, user.id);
    assert!(repo.profile_exists_for_user(user.id).await?);

    let reloaded = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(reloaded.role, UserRole::Trainer);
    assert_eq!(reloaded.status, AccountStatus::Approved);

    Ok(())
}
