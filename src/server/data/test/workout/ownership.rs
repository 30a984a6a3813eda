use super::*;

/// Tests that workouts are listed per user.
///
/// Expected: Ok with only the caller's workouts
#[tokio::test]
async fn lists_only_own_workouts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Workout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = WorkoutRepository::new(db);
    repo.create(params(alice.id, "Squats")).await?;
    repo.create(params(bob.id, "Rows")).await?;

    let workouts = repo.get_for_user(alice.id).await?;

    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].name, "Squats");

    Ok(())
}

/// Tests that another user's workout cannot be read, updated or deleted.
///
/// Expected: Ok(None) or Ok(false) for every foreign access
#[tokio::test]
async fn hides_foreign_workouts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Workout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;

    let repo = WorkoutRepository::new(db);
    let workout = repo.create(params(owner.id, "Deadlift")).await?;

    assert!(repo.find_for_user(workout.id, intruder.id).await?.is_none());
    assert!(repo
        .update(workout.id, intruder.id, UpdateWorkoutParams::default())
        .await?
        .is_none());
    assert!(!repo.delete(workout.id, intruder.id).await?);

    assert!(repo.find_for_user(workout.id, owner.id).await?.is_some());

    Ok(())
}
