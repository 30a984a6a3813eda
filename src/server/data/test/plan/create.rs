use super::*;

/// Tests that new plans are active and carry the discounted price.
///
/// Expected: Ok with final_price = price * (1 - discount / 100)
#[tokio::test]
async fn stores_final_price_and_activates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MembershipPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanRepository::new(db);
    let plan = repo
        .create(CreatePlanParams {
            name: "Quarterly".to_string(),
            description: None,
            price: 3000.0,
            discount: 10.0,
            duration_days: 90,
        })
        .await?;

    assert_eq!(plan.final_price, 2700.0);
    assert!(plan.is_active);

    Ok(())
}
