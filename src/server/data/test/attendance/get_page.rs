use super::*;

/// Tests paging through sessions newest first.
///
/// Expected: Ok with the second-newest session when skipping one and taking one
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();

    let mut ids = Vec::new();
    for day in 0..3 {
        let check_in = base + Duration::days(day);
        let session = TrainerAttendanceFactory::new(db, trainer.id)
            .check_in(check_in)
            .check_out(check_in + Duration::hours(8))
            .build()
            .await?;
        ids.push(session.id);
    }

    let repo = AttendanceRepository::new(db);
    let page = repo.get_page(1, 1).await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, ids[1]);

    Ok(())
}
