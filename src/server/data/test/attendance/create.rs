use super::*;

/// Tests opening a session for a trainer.
///
/// Expected: Ok with an open session stamped at the given time
#[tokio::test]
async fn opens_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    let now = Utc::now();

    let repo = AttendanceRepository::new(db);
    let session = repo.create(trainer.id, now).await?;

    assert_eq!(session.trainer_id, trainer.id);
    assert_eq!(session.check_in, now);
    assert!(session.is_open());

    Ok(())
}

/// Tests that the storage layer refuses a second open session.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_second_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    factory::create_open_session(db, trainer.id).await?;

    let repo = AttendanceRepository::new(db);
    let err = repo.create(trainer.id, Utc::now()).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
