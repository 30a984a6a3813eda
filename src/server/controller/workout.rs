use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        workout::{CreateWorkoutDto, UpdateWorkoutDto, WorkoutDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::workout::{CreateWorkoutParams, UpdateWorkoutParams, Workout},
        service::workout::WorkoutService,
        state::AppState,
    },
};

/// Tag for grouping workout log endpoints in OpenAPI documentation
pub static WORKOUT_TAG: &str = "workouts";

/// List the caller's workouts, newest first.
///
/// # Access Control
/// - Any approved user
#[utoipa::path(
    get,
    path = "/api/workouts",
    tag = WORKOUT_TAG,
    responses(
        (status = 200, description = "Own workouts", body = Vec<WorkoutDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_workouts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let workouts: Vec<WorkoutDto> = WorkoutService::new(&state.db)
        .list(user.id)
        .await?
        .into_iter()
        .map(Workout::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(workouts)))
}

/// Get one of the caller's workouts.
///
/// Workouts owned by other users are reported as not found.
#[utoipa::path(
    get,
    path = "/api/workouts/{workout_id}",
    tag = WORKOUT_TAG,
    params(("workout_id" = i32, Path, description = "Workout ID")),
    responses(
        (status = 200, description = "Workout", body = WorkoutDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Workout not found", body = ErrorDto)
    ),
)]
pub async fn get_workout(
    State(state): State<AppState>,
    session: Session,
    Path(workout_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let workout = WorkoutService::new(&state.db)
        .get(workout_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(workout.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    tag = WORKOUT_TAG,
    request_body = CreateWorkoutDto,
    responses(
        (status = 201, description = "Workout logged", body = WorkoutDto),
        (status = 400, description = "Missing workout name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_workout(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateWorkoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let workout = WorkoutService::new(&state.db)
        .create(CreateWorkoutParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(workout.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/workouts/{workout_id}",
    tag = WORKOUT_TAG,
    params(("workout_id" = i32, Path, description = "Workout ID")),
    request_body = UpdateWorkoutDto,
    responses(
        (status = 200, description = "Workout updated", body = WorkoutDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Workout not found", body = ErrorDto)
    ),
)]
pub async fn update_workout(
    State(state): State<AppState>,
    session: Session,
    Path(workout_id): Path<i32>,
    Json(payload): Json<UpdateWorkoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let workout = WorkoutService::new(&state.db)
        .update(workout_id, user.id, UpdateWorkoutParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(workout.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{workout_id}",
    tag = WORKOUT_TAG,
    params(("workout_id" = i32, Path, description = "Workout ID")),
    responses(
        (status = 200, description = "Workout deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Workout not found", body = ErrorDto)
    ),
)]
pub async fn delete_workout(
    State(state): State<AppState>,
    session: Session,
    Path(workout_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    WorkoutService::new(&state.db)
        .delete(workout_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Workout deleted".to_string(),
        }),
    ))
}
