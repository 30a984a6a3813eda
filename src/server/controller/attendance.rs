use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        attendance::{
            AttendanceActionDto, AttendanceDto, AttendancePageQuery, AttendanceRangeQuery,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::attendance::AttendanceSession,
        service::attendance::AttendanceService,
        state::AppState,
    },
};

/// Tag for grouping trainer attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "trainer-attendance";

/// Check a trainer in.
///
/// Trainers check themselves in and may omit `trainer_id`. Admins and receptionists must
/// name the trainer they are checking in.
///
/// # Access Control
/// - `TrainerAccess` - Admins, receptionists and trainers
///
/// # Returns
/// - `201 Created` - New open session
/// - `400 Bad Request` - Missing trainer ID, or target is not a trainer
/// - `403 Forbidden` - Trainer acting on another trainer
/// - `404 Not Found` - Unknown trainer
/// - `409 Conflict` - Trainer already checked in
#[utoipa::path(
    post,
    path = "/api/trainer-attendance/checkin",
    tag = ATTENDANCE_TAG,
    request_body = AttendanceActionDto,
    responses(
        (status = 201, description = "Checked in", body = AttendanceDto),
        (status = 400, description = "Missing trainer ID or target is not a trainer", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to check in this trainer", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 409, description = "Trainer already checked in", body = ErrorDto)
    ),
)]
pub async fn check_in(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AttendanceActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TrainerAccess])
        .await?;

    let attendance = AttendanceService::new(&state.db)
        .check_in(&actor, payload.trainer_id, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(attendance.into_dto())))
}

/// Check a trainer out.
///
/// Closes the trainer's most recent open session. Target resolution follows the same rules
/// as check-in.
///
/// # Access Control
/// - `TrainerAccess`
///
/// # Returns
/// - `200 OK` - Closed session
/// - `409 Conflict` - Trainer has no open session
#[utoipa::path(
    post,
    path = "/api/trainer-attendance/checkout",
    tag = ATTENDANCE_TAG,
    request_body = AttendanceActionDto,
    responses(
        (status = 200, description = "Checked out", body = AttendanceDto),
        (status = 400, description = "Missing trainer ID or target is not a trainer", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to check out this trainer", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 409, description = "No open session", body = ErrorDto)
    ),
)]
pub async fn check_out(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AttendanceActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TrainerAccess])
        .await?;

    let attendance = AttendanceService::new(&state.db)
        .check_out(&actor, payload.trainer_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}

/// List all attendance sessions, newest first.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    get,
    path = "/api/trainer-attendance",
    tag = ATTENDANCE_TAG,
    params(AttendancePageQuery),
    responses(
        (status = 200, description = "Attendance sessions", body = Vec<AttendanceDto>),
        (status = 403, description = "Not front desk staff", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AttendancePageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let sessions = AttendanceService::new(&state.db)
        .list(params.skip, params.limit)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(sessions))))
}

/// The calling trainer's own attendance history, newest first.
///
/// # Access Control
/// - `Trainer`
#[utoipa::path(
    get,
    path = "/api/trainer-attendance/me",
    tag = ATTENDANCE_TAG,
    responses(
        (status = 200, description = "Own attendance sessions", body = Vec<AttendanceDto>),
        (status = 403, description = "Not a trainer", body = ErrorDto)
    ),
)]
pub async fn get_my_attendance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let trainer = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Trainer])
        .await?;

    let sessions = AttendanceService::new(&state.db)
        .for_trainer(trainer.id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(sessions))))
}

/// Sessions checked in since UTC midnight, newest first.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    get,
    path = "/api/trainer-attendance/today",
    tag = ATTENDANCE_TAG,
    responses(
        (status = 200, description = "Today's attendance sessions", body = Vec<AttendanceDto>),
        (status = 403, description = "Not front desk staff", body = ErrorDto)
    ),
)]
pub async fn get_today_attendance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let sessions = AttendanceService::new(&state.db)
        .today(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(sessions))))
}

/// A trainer's sessions within an inclusive range of UTC dates, oldest first.
///
/// # Access Control
/// - `FrontDesk`
///
/// # Returns
/// - `200 OK` - Matching sessions
/// - `400 Bad Request` - `start_date` after `end_date`
#[utoipa::path(
    get,
    path = "/api/trainer-attendance/by-trainer",
    tag = ATTENDANCE_TAG,
    params(AttendanceRangeQuery),
    responses(
        (status = 200, description = "Attendance sessions in range", body = Vec<AttendanceDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 403, description = "Not front desk staff", body = ErrorDto)
    ),
)]
pub async fn get_attendance_by_trainer(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AttendanceRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let sessions = AttendanceService::new(&state.db)
        .by_trainer(params.trainer_id, params.start_date, params.end_date)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(sessions))))
}

fn into_dtos(sessions: Vec<AttendanceSession>) -> Vec<AttendanceDto> {
    sessions
        .into_iter()
        .map(AttendanceSession::into_dto)
        .collect()
}
