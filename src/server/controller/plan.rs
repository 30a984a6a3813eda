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
        plan::{CreatePlanDto, PlanDto, UpdatePlanDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::plan::{CreatePlanParams, MembershipPlan, UpdatePlanParams},
        service::plan::PlanService,
        state::AppState,
    },
};

/// Tag for grouping membership plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "plans";

/// Create a membership plan.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new plan with its computed final price
/// - `400 Bad Request` - Invalid name, price, discount or duration
#[utoipa::path(
    post,
    path = "/api/plans",
    tag = PLAN_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Plan created", body = PlanDto),
        (status = 400, description = "Invalid plan", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plan = PlanService::new(&state.db)
        .create(CreatePlanParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

/// List all membership plans.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "All plans", body = Vec<PlanDto>)
    ),
)]
pub async fn get_plans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plans: Vec<PlanDto> = PlanService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(MembershipPlan::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(plans)))
}

/// Get a membership plan by ID.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/plans/{plan_id}",
    tag = PLAN_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Plan", body = PlanDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
)]
pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let plan = PlanService::new(&state.db).get_by_id(plan_id).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Update a membership plan.
///
/// The final price is recomputed from the merged price and discount.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/plans/{plan_id}",
    tag = PLAN_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Plan updated", body = PlanDto),
        (status = 400, description = "Invalid plan", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    session: Session,
    Path(plan_id): Path<i32>,
    Json(payload): Json<UpdatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plan = PlanService::new(&state.db)
        .update(plan_id, UpdatePlanParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Delete a membership plan.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/plans/{plan_id}",
    tag = PLAN_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Plan deleted", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    session: Session,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PlanService::new(&state.db).delete(plan_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Plan {} deleted", plan_id),
        }),
    ))
}
