use super::*;

/// Tests that changing only the discount recomputes the final price from the stored price.
///
/// Expected: Ok(Some) with final price derived from old price and new discount
#[tokio::test]
async fn recomputes_final_price_from_merged_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MembershipPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = MembershipPlanFactory::new(db)
        .price(2000.0)
        .discount(0.0)
        .build()
        .await?;

    let repo = PlanRepository::new(db);
    let updated = repo
        .update(
            plan.id,
            UpdatePlanParams {
                discount: Some(50.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 2000.0);
    assert_eq!(updated.final_price, 1000.0);

    Ok(())
}

/// Tests deactivating a plan.
///
/// Expected: Ok(Some) with is_active false
#[tokio::test]
async fn deactivates_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MembershipPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = MembershipPlanFactory::new(db).build().await?;

    let repo = PlanRepository::new(db);
    let updated = repo
        .update(
            plan.id,
            UpdatePlanParams {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(!updated.is_active);

    Ok(())
}
