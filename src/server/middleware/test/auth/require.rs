use super::*;

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that pending accounts cannot use the API even without permissions required.
///
/// Expected: Err(AuthError::AccountNotApproved)
#[tokio::test]
async fn rejects_pending_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = UserFactory::new(db)
        .status(AccountStatus::Pending)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotApproved(_)))
    ));

    Ok(())
}

/// Tests that an approved member passes an empty permission list.
///
/// Expected: Ok(User) with the member's ID
#[tokio::test]
async fn empty_permission_list_grants_approved_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = UserFactory::new(db).build().await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.role, Role::Member);

    Ok(())
}

/// Tests the front desk permission.
///
/// Verifies that a receptionist passes and a trainer is denied.
///
/// Expected: Ok for receptionist, Err(AuthError::AccessDenied) for trainer
#[tokio::test]
async fn front_desk_admits_receptionist_not_trainer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let desk = UserFactory::new(db)
        .role(UserRole::Receptionist)
        .build()
        .await?;
    let trainer = UserFactory::new(db).role(UserRole::Trainer).build().await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(desk.id).await?;
    assert!(guard.require(&[Permission::FrontDesk]).await.is_ok());

    auth_session.set_user_id(trainer.id).await?;
    let result = guard.require(&[Permission::FrontDesk]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, trainer.id);
            assert!(message.contains("FrontDesk"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that the trainer-only permission excludes admins.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn trainer_permission_excludes_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = UserFactory::new(db).role(UserRole::Admin).build().await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Trainer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

#[test]
fn permission_role_table() {
    assert!(Permission::Admin.allows(Role::Admin));
    assert!(!Permission::Admin.allows(Role::Receptionist));
    assert!(Permission::FrontDesk.allows(Role::Receptionist));
    assert!(Permission::TrainerAccess.allows(Role::Trainer));
    assert!(!Permission::TrainerAccess.allows(Role::Member));
    assert!(!Permission::Trainer.allows(Role::Admin));
}
