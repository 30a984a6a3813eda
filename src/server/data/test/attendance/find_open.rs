use super::*;

/// Tests that closed sessions are ignored when looking for the open one.
///
/// Expected: Ok(Some) with the open session
#[tokio::test]
async fn finds_open_session_among_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    factory::create_closed_session(db, trainer.id).await?;
    let open = factory::create_open_session(db, trainer.id).await?;

    let repo = AttendanceRepository::new(db);
    let found = repo.find_open(trainer.id).await?;

    assert_eq!(found.map(|s| s.id), Some(open.id));

    Ok(())
}

/// Tests a trainer with only closed sessions.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    factory::create_closed_session(db, trainer.id).await?;

    let repo = AttendanceRepository::new(db);
    let found = repo.find_open(trainer.id).await?;

    assert!(found.is_none());

    Ok(())
}
