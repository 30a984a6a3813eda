use super::*;

/// Tests checking out with no open session.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn conflict_without_open_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    factory::create_closed_session(db, trainer.id).await?;
    let trainer = User::from_entity(trainer);

    let result = AttendanceService::new(db)
        .check_out(&trainer, None, Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AttendanceErr(AttendanceError::Conflict(_)))
    ));

    Ok(())
}

/// Tests an admin closing a trainer's session.
///
/// Expected: Ok with the open session closed at the given time
#[tokio::test]
async fn admin_closes_trainer_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::create_admin(db).await?);
    let trainer = factory::create_trainer(db).await?;
    let check_in = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
    let open = TrainerAttendanceFactory::new(db, trainer.id)
        .check_in(check_in)
        .build()
        .await?;

    let now = check_in + Duration::hours(8);
    let closed = AttendanceService::new(db)
        .check_out(&admin, Some(trainer.id), now)
        .await?;

    assert_eq!(closed.id, open.id);
    assert_eq!(closed.check_out, Some(now));

    Ok(())
}

/// Tests a trainer trying to check out a colleague.
///
/// Expected: Err(Forbidden) and the colleague's session stays open
#[tokio::test]
async fn trainer_cannot_check_out_colleague() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = User::from_entity(factory::create_trainer(db).await?);
    let colleague = factory::create_trainer(db).await?;
    factory::create_open_session(db, colleague.id).await?;
    let service = AttendanceService::new(db);

    let result = service
        .check_out(&trainer, Some(colleague.id), Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AttendanceErr(AttendanceError::Forbidden(_)))
    ));

    let sessions = service.for_trainer(colleague.id).await?;
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].is_open());

    Ok(())
}

/// Tests a receptionist checking out without naming a trainer.
///
/// A trainer ID of zero is treated the same as a missing one.
///
/// Expected: Err(InvalidRequest) for both
#[tokio::test]
async fn receptionist_must_name_trainer_to_check_out() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let desk = User::from_entity(factory::create_receptionist(db).await?);
    let trainer = factory::create_trainer(db).await?;
    factory::create_open_session(db, trainer.id).await?;
    let service = AttendanceService::new(db);

    for requested in [None, Some(0)] {
        let result = service.check_out(&desk, requested, Utc::now()).await;

        assert!(matches!(
            result,
            Err(AppError::AttendanceErr(AttendanceError::InvalidRequest(_)))
        ));
    }

    Ok(())
}
