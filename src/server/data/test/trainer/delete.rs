use super::*;

/// Tests deleting a profile and demoting its user.
///
/// Expected: Ok(true) and the user's role reset to member
#[tokio::test]
async fn deletes_and_demotes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::TrainerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_trainer(db).await?;
    let profile = factory::create_trainer_profile(db, &user).await?;

    let repo = TrainerRepository::new(db);
    assert!(repo.delete(profile.id, true).await?);

    let reloaded = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(reloaded.role, UserRole::Member);
    assert!(!repo.profile_exists_for_user(user.id).await?);

    Ok(())
}

/// Tests deleting a profile while keeping the trainer role.
///
/// Expected: Ok(true) and the user's role unchanged
#[tokio::test]
async fn deletes_without_demoting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::TrainerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_trainer(db).await?;
    let profile = factory::create_trainer_profile(db, &user).await?;

    let repo = TrainerRepository::new(db);
    assert!(repo.delete(profile.id, false).await?);

    let reloaded = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(reloaded.role, UserRole::Trainer);

    Ok(())
}

/// Tests deleting a profile that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::TrainerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainerRepository::new(db);
    assert!(!repo.delete(77, true).await?);

    Ok(())
}
