use super::*;

/// Tests that new enquiries start as `New` and can move through the pipeline.
///
/// Expected: Ok with status updated to Converted
#[tokio::test]
async fn creates_new_query_and_updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactQuery)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactQueryRepository::new(db);
    let query = repo
        .create(CreateContactQueryParams {
            name: "Kiran".to_string(),
            mobile: "9123456780".to_string(),
            email: None,
            message: Some("Evening batch timings?".to_string()),
        })
        .await?;

    assert_eq!(query.status, QueryStatus::New);

    let updated = repo
        .set_status(query.id, QueryStatus::Converted)
        .await?
        .unwrap();
    assert_eq!(updated.status, QueryStatus::Converted);

    assert!(repo.delete(query.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
