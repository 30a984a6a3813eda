use super::*;

/// Tests a partial profile update.
///
/// Expected: Ok(Some) with bio changed and specialization kept
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
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
    let updated = repo
        .update(
            profile.id,
            TrainerDetails {
                bio: Some("Ten years of mobility coaching".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.bio.as_deref(), Some("Ten years of mobility coaching"));
    assert_eq!(updated.specialization, profile.specialization);
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests updating a profile that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::TrainerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainerRepository::new(db);
    let result = repo.update(9, TrainerDetails::default()).await?;

    assert!(result.is_none());

    Ok(())
}
