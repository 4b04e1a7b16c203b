use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CreateNoticeRequest, NoticeListResponse, NoticeQueryParams, NoticeResponse,
    UpdateNoticeRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{NoticeRepository, NoticeUpdate};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/notices", post(create_notice).get(get_all_notices))
        .route(
            "/api/v1/notices/{notice_id}",
            get(get_notice_by_id)
                .put(update_notice)
                .delete(delete_notice),
        )
}

/// Post a notice (Admin/Principal only)
#[utoipa::path(
    post,
    path = "/api/v1/notices",
    request_body = CreateNoticeRequest,
    responses(
        (status = 201, description = "Notice posted", body = NoticeResponse),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notices"
)]
pub async fn create_notice(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateNoticeRequest>,
) -> Result<(StatusCode, Json<NoticeResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    if payload.title.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Title is required".to_string()));
    }

    let record = NoticeRepository::new()
        .create(
            payload.title,
            payload.body,
            payload.audience,
            claims.user_id,
            payload.is_pinned,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create notice: {}", e),
            )
        })?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// List notices, pinned first then newest
#[utoipa::path(
    get,
    path = "/api/v1/notices",
    params(NoticeQueryParams),
    responses(
        (status = 200, description = "Notices retrieved", body = NoticeListResponse),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notices"
)]
pub async fn get_all_notices(
    AuthClaims(_claims): AuthClaims,
    Query(params): Query<NoticeQueryParams>,
) -> Result<(StatusCode, Json<NoticeListResponse>), (StatusCode, String)> {
    let (records, total) = NoticeRepository::new()
        .find_all_with_pagination(params.page, params.page_size, params.audience)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = NoticeListResponse {
        total,
        page: params.page,
        page_size: params.page_size,
        notices: records.into_iter().map(NoticeResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get one notice
#[utoipa::path(
    get,
    path = "/api/v1/notices/{notice_id}",
    params(
        ("notice_id" = Uuid, Path, description = "Notice ID")
    ),
    responses(
        (status = 200, description = "Notice retrieved", body = NoticeResponse),
        (status = 404, description = "Notice not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notices"
)]
pub async fn get_notice_by_id(
    AuthClaims(_claims): AuthClaims,
    Path(notice_id): Path<Uuid>,
) -> Result<(StatusCode, Json<NoticeResponse>), (StatusCode, String)> {
    let record = NoticeRepository::new()
        .find_by_id(notice_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Notice not found".to_string()))?;

    Ok((StatusCode::OK, Json(record.into())))
}

/// Update a notice (Admin/Principal only)
#[utoipa::path(
    put,
    path = "/api/v1/notices/{notice_id}",
    params(
        ("notice_id" = Uuid, Path, description = "Notice ID")
    ),
    request_body = UpdateNoticeRequest,
    responses(
        (status = 200, description = "Notice updated", body = NoticeResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Notice not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notices"
)]
pub async fn update_notice(
    AuthClaims(claims): AuthClaims,
    Path(notice_id): Path<Uuid>,
    Json(payload): Json<UpdateNoticeRequest>,
) -> Result<(StatusCode, Json<NoticeResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let updates = NoticeUpdate {
        title: payload.title,
        body: payload.body,
        audience: payload.audience,
        is_pinned: payload.is_pinned,
    };

    let record = NoticeRepository::new()
        .update(notice_id, updates)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to update notice: {}", e),
            )
        })?;

    Ok((StatusCode::OK, Json(record.into())))
}

/// Delete a notice (Admin/Principal only)
#[utoipa::path(
    delete,
    path = "/api/v1/notices/{notice_id}",
    params(
        ("notice_id" = Uuid, Path, description = "Notice ID")
    ),
    responses(
        (status = 204, description = "Notice deleted"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notices"
)]
pub async fn delete_notice(
    AuthClaims(claims): AuthClaims,
    Path(notice_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    NoticeRepository::new().delete(notice_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to delete notice: {}", e),
        )
    })?;

    Ok(StatusCode::NO_CONTENT)
}
