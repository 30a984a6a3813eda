use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        trainer::{
            AttachTrainerDto, CreateTrainerDto, DeleteTrainerQuery, TrainerDto, UpdateTrainerDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::trainer::{
            AttachTrainerParams, CreateTrainerParams, TrainerDetails, TrainerProfile,
        },
        service::trainer::TrainerService,
        state::AppState,
    },
};

/// Tag for grouping trainer endpoints in OpenAPI documentation
pub static TRAINER_TAG: &str = "trainers";

/// Create a trainer account with a profile.
///
/// The account is created approved, with role trainer.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new trainer
/// - `400 Bad Request` - Email already registered
#[utoipa::path(
    post,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    request_body = CreateTrainerDto,
    responses(
        (status = 201, description = "Trainer created", body = TrainerDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_trainer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTrainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let trainer = TrainerService::new(&state.db)
        .create(CreateTrainerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(trainer.into_dto())))
}

/// Promote an existing account to trainer.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new trainer profile
/// - `400 Bad Request` - User already has a trainer profile
/// - `404 Not Found` - No user with that email
#[utoipa::path(
    post,
    path = "/api/trainers/attach",
    tag = TRAINER_TAG,
    request_body = AttachTrainerDto,
    responses(
        (status = 201, description = "Trainer profile created", body = TrainerDto),
        (status = 400, description = "User already has a trainer profile", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn attach_trainer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AttachTrainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let trainer = TrainerService::new(&state.db)
        .attach(AttachTrainerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(trainer.into_dto())))
}

/// List trainers.
///
/// # Access Control
/// - `TrainerAccess`
#[utoipa::path(
    get,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    responses(
        (status = 200, description = "All trainers", body = Vec<TrainerDto>),
        (status = 403, description = "Not staff", body = ErrorDto)
    ),
)]
pub async fn get_trainers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TrainerAccess])
        .await?;

    let trainers = TrainerService::new(&state.db).get_all().await?;
    let trainers: Vec<TrainerDto> = trainers
        .into_iter()
        .map(TrainerProfile::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(trainers)))
}

/// Get a trainer by profile ID.
///
/// # Access Control
/// - `TrainerAccess`
#[utoipa::path(
    get,
    path = "/api/trainers/{trainer_id}",
    tag = TRAINER_TAG,
    params(("trainer_id" = i32, Path, description = "Trainer profile ID")),
    responses(
        (status = 200, description = "Trainer", body = TrainerDto),
        (status = 404, description = "Trainer not found", body = ErrorDto)
    ),
)]
pub async fn get_trainer(
    State(state): State<AppState>,
    session: Session,
    Path(trainer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TrainerAccess])
        .await?;

    let trainer = TrainerService::new(&state.db).get_by_id(trainer_id).await?;

    Ok((StatusCode::OK, Json(trainer.into_dto())))
}

/// Update a trainer profile.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    put,
    path = "/api/trainers/{trainer_id}",
    tag = TRAINER_TAG,
    params(("trainer_id" = i32, Path, description = "Trainer profile ID")),
    request_body = UpdateTrainerDto,
    responses(
        (status = 200, description = "Trainer updated", body = TrainerDto),
        (status = 404, description = "Trainer not found", body = ErrorDto)
    ),
)]
pub async fn update_trainer(
    State(state): State<AppState>,
    session: Session,
    Path(trainer_id): Path<i32>,
    Json(payload): Json<UpdateTrainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let trainer = TrainerService::new(&state.db)
        .update(trainer_id, TrainerDetails::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(trainer.into_dto())))
}

/// Delete a trainer profile.
///
/// By default the account is demoted back to member; pass `demote_user=false` to keep the
/// trainer role.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/trainers/{trainer_id}",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer profile ID"),
        DeleteTrainerQuery
    ),
    responses(
        (status = 200, description = "Trainer deleted", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto)
    ),
)]
pub async fn delete_trainer(
    State(state): State<AppState>,
    session: Session,
    Path(trainer_id): Path<i32>,
    Query(params): Query<DeleteTrainerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TrainerService::new(&state.db)
        .delete(trainer_id, params.demote_user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Trainer {} deleted", trainer_id),
        }),
    ))
}
