use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::member::{CreateMemberParams, UpdateMemberParams},
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "members";

/// Register a gym member.
///
/// The first fitness checkup is scheduled from the membership start date, or from the
/// registration date when no start date is given.
///
/// # Access Control
/// - `FrontDesk` - Admins and receptionists
///
/// # Returns
/// - `201 Created` - The new member with checkup status
/// - `400 Bad Request` - Phone number already registered
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 400, description = "Phone number already registered", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not front desk staff", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let today = Utc::now().date_naive();
    let member = MemberService::new(&state.db)
        .create(
            CreateMemberParams::from_dto(payload),
            state.checkup_interval_days,
            today,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto(today))))
}

/// List all members.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "All members", body = Vec<MemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not front desk staff", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let today = Utc::now().date_naive();
    let members = MemberService::new(&state.db)
        .get_all(state.checkup_interval_days, today)
        .await?;

    let members: Vec<MemberDto> = members
        .into_iter()
        .map(|member| member.into_dto(today))
        .collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Get a member by ID.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    get,
    path = "/api/members/{member_id}",
    tag = MEMBER_TAG,
    params(("member_id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let today = Utc::now().date_naive();
    let member = MemberService::new(&state.db)
        .get_by_id(member_id, state.checkup_interval_days, today)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto(today))))
}

/// Update a member.
///
/// Only supplied fields change. A new membership start date reschedules the next checkup.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    put,
    path = "/api/members/{member_id}",
    tag = MEMBER_TAG,
    params(("member_id" = i32, Path, description = "Member ID")),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 400, description = "Phone number already registered", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let today = Utc::now().date_naive();
    let member = MemberService::new(&state.db)
        .update(
            member_id,
            UpdateMemberParams::from_dto(payload),
            state.checkup_interval_days,
            today,
        )
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto(today))))
}

/// Delete a member.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/members/{member_id}",
    tag = MEMBER_TAG,
    params(("member_id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MemberService::new(&state.db).delete(member_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Member {} deleted", member_id),
        }),
    ))
}
