use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, member::MemberDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::checkup::CheckupService,
        state::AppState,
    },
};

/// Tag for grouping fitness checkup endpoints in OpenAPI documentation
pub static CHECKUP_TAG: &str = "fitness-checkups";

/// List members whose fitness checkup is overdue or due within two days.
///
/// Members are ordered by next checkup date, most urgent first.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    get,
    path = "/api/fitness-checkups/due",
    tag = CHECKUP_TAG,
    responses(
        (status = 200, description = "Members due for a checkup", body = Vec<MemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not front desk staff", body = ErrorDto)
    ),
)]
pub async fn get_due_checkups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let today = Utc::now().date_naive();
    let members = CheckupService::new(&state.db).due(today).await?;

    let members: Vec<MemberDto> = members
        .into_iter()
        .map(|member| member.into_dto(today))
        .collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Mark a member's fitness checkup as done today.
///
/// Sets the last checkup to today and schedules the next one a full interval later.
///
/// # Access Control
/// - `FrontDesk`
///
/// # Returns
/// - `200 OK` - Member with updated checkup dates
/// - `404 Not Found` - Unknown member
#[utoipa::path(
    post,
    path = "/api/fitness-checkups/{member_id}/mark-done",
    tag = CHECKUP_TAG,
    params(("member_id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Checkup recorded", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn mark_checkup_done(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let today = Utc::now().date_naive();
    let member = CheckupService::new(&state.db)
        .mark_done(member_id, state.checkup_interval_days, today)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto(today))))
}

/// Recompute and store a member's next checkup date.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    post,
    path = "/api/fitness-checkups/{member_id}/recalculate",
    tag = CHECKUP_TAG,
    params(("member_id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Next checkup recalculated", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn recalculate_checkup(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let today = Utc::now().date_naive();
    let member = CheckupService::new(&state.db)
        .recalculate(member_id, state.checkup_interval_days, today)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto(today))))
}
