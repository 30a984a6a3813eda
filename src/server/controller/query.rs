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
        query::{ContactQueryDto, CreateContactQueryDto, UpdateQueryStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::query::{ContactQuery, CreateContactQueryParams, QueryStatus},
        service::query::ContactQueryService,
        state::AppState,
    },
};

/// Tag for grouping contact query endpoints in OpenAPI documentation
pub static QUERY_TAG: &str = "queries";

/// Submit a "contact us" query.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Stored query with status `new`
/// - `400 Bad Request` - Name, mobile or message out of bounds
#[utoipa::path(
    post,
    path = "/api/queries",
    tag = QUERY_TAG,
    request_body = CreateContactQueryDto,
    responses(
        (status = 201, description = "Query submitted", body = ContactQueryDto),
        (status = 400, description = "Invalid query", body = ErrorDto)
    ),
)]
pub async fn submit_query(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let query = ContactQueryService::new(&state.db)
        .submit(CreateContactQueryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(query.into_dto())))
}

/// List contact queries, newest first.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    get,
    path = "/api/queries",
    tag = QUERY_TAG,
    responses(
        (status = 200, description = "All queries", body = Vec<ContactQueryDto>),
        (status = 403, description = "Not front desk staff", body = ErrorDto)
    ),
)]
pub async fn get_queries(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let queries: Vec<ContactQueryDto> = ContactQueryService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(ContactQuery::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(queries)))
}

/// Move a query to a new follow-up status.
///
/// # Access Control
/// - `FrontDesk`
#[utoipa::path(
    patch,
    path = "/api/queries/{query_id}/status",
    tag = QUERY_TAG,
    params(("query_id" = i32, Path, description = "Query ID")),
    request_body = UpdateQueryStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ContactQueryDto),
        (status = 403, description = "Not front desk staff", body = ErrorDto),
        (status = 404, description = "Query not found", body = ErrorDto)
    ),
)]
pub async fn update_query_status(
    State(state): State<AppState>,
    session: Session,
    Path(query_id): Path<i32>,
    Json(payload): Json<UpdateQueryStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    let query = ContactQueryService::new(&state.db)
        .set_status(query_id, QueryStatus::from_dto(payload.status))
        .await?;

    Ok((StatusCode::OK, Json(query.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/queries/{query_id}",
    tag = QUERY_TAG,
    params(("query_id" = i32, Path, description = "Query ID")),
    responses(
        (status = 200, description = "Query deleted", body = MessageDto),
        (status = 403, description = "Not front desk staff", body = ErrorDto),
        (status = 404, description = "Query not found", body = ErrorDto)
    ),
)]
pub async fn delete_query(
    State(state): State<AppState>,
    session: Session,
    Path(query_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::FrontDesk])
        .await?;

    ContactQueryService::new(&state.db).delete(query_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Query {} deleted", query_id),
        }),
    ))
}
