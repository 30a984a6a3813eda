use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        membership::{MembershipDto, MembershipPreviewDto, MembershipRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::membership::{AssignMembershipParams, MemberMembership},
        service::membership::MembershipService,
        state::AppState,
    },
};

/// Tag for grouping membership assignment endpoints in OpenAPI documentation
pub static MEMBERSHIP_TAG: &str = "member-memberships";

fn params_from(payload: MembershipRequestDto) -> AssignMembershipParams {
    AssignMembershipParams {
        member_id: payload.member_id,
        plan_id: payload.plan_id,
        start_date: payload.start_date,
    }
}

/// Preview a plan assignment without saving it.
///
/// # Access Control
/// - `FrontDesk`
///
/// # Returns
/// - `200 OK` - Member, plan and computed end date
/// - `404 Not Found` - Unknown member or plan
#[utoipa::path(
    post,
    path = "/api/member-memberships/preview",
    tag = MEMBERSHIP_TAG,
    request_body = MembershipRequestDto,
    responses(
        (status = 200, description = "Assignment preview", body = MembershipPreviewDto),
        (status = 403, description = "Not front desk staff", body = ErrorDto),
        (status = 404, description = "Member or plan not found", body = ErrorDto)
    ),
)]
pub async fn preview_membership(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MembershipRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let preview = MembershipService::new(&state.db)
        .preview(params_from(payload))
        .await?;

    Ok((StatusCode::OK, Json(preview.into_dto())))
}

/// Assign a plan to a member.
///
/// # Access Control
/// - `FrontDesk`
///
/// # Returns
/// - `201 Created` - The stored assignment
/// - `404 Not Found` - Unknown member or plan
#[utoipa::path(
    post,
    path = "/api/member-memberships/assign",
    tag = MEMBERSHIP_TAG,
    request_body = MembershipRequestDto,
    responses(
        (status = 201, description = "Plan assigned", body = MembershipDto),
        (status = 403, description = "Not front desk staff", body = ErrorDto),
        (status = 404, description = "Member or plan not found", body = ErrorDto)
    ),
)]
pub async fn assign_membership(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MembershipRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let membership = MembershipService::new(&state.db)
        .assign(params_from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(membership.into_dto())))
}

/// A member's plan history, latest start first.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    get,
    path = "/api/member-memberships/{member_id}",
    tag = MEMBERSHIP_TAG,
    params(("member_id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Plan history", body = Vec<MembershipDto>),
        (status = 403, description = "Not front desk staff", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn get_membership_history(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let history: Vec<MembershipDto> = MembershipService::new(&state.db)
        .history(member_id)
        .await?
        .into_iter()
        .map(MemberMembership::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(history)))
}
