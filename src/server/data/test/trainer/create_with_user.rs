use super::*;

/// Tests creating a trainer account and profile together.
///
/// Expected: Ok with the profile joined to the new user's name and email
#[tokio::test]
async fn creates_user_and_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::TrainerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainerRepository::new(db);
    let profile = repo
        .create_with_user(
            InsertUserParam {
                name: "Coach Meera".to_string(),
                email: "meera@gym.test".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Trainer,
                status: ApprovalStatus::Approved,
            },
            TrainerDetails {
                specialization: Some("Strength".to_string()),
                experience_years: Some(6),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(profile.user_email, "meera@gym.test");
    assert_eq!(profile.user_name, "Coach Meera");
    assert_eq!(profile.specialization.as_deref(), Some("Strength"));

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Tests that a failed user insert leaves no profile behind.
///
/// Expected: Err and no trainer profiles stored
#[tokio::test]
async fn rolls_back_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::TrainerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("dup@gym.test").build().await?;

    let repo = TrainerRepository::new(db);
    let result = repo
        .create_with_user(
            InsertUserParam {
                name: "Dup".to_string(),
                email: "dup@gym.test".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Trainer,
                status: ApprovalStatus::Approved,
            },
            TrainerDetails::default(),
        )
        .await;

    assert!(result.is_err());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
