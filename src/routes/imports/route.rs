use axum::{
    Json, Router,
    extract::{Multipart, Query},
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{
    HistoryQueryParams, ImportHistoryListResponse, ImportHistoryResponse, ImportResponse,
};
use crate::extractor::AuthClaims;
use crate::import::{ImportKind, run_import};
use crate::middleware::permission;
use crate::repositories::ImportHistoryRepository;
use crate::utils::upload::{remove_upload, save_import_file};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/imports/students", post(import_students))
        .route("/api/v1/imports/teachers", post(import_teachers))
        .route("/api/v1/imports/admin-staff", post(import_admin_staff))
        .route("/api/v1/imports/support-staff", post(import_support_staff))
        .route("/api/v1/imports/history", get(get_import_history))
}

/// Bulk import students from an uploaded spreadsheet or CSV (Admin only)
#[utoipa::path(
    post,
    path = "/api/v1/imports/students",
    request_body(content = String, content_type = "multipart/form-data", description = "Multipart form with a single `file` field"),
    responses(
        (status = 201, description = "Import completed, possibly with row errors", body = ImportResponse),
        (status = 400, description = "Unreadable or empty file"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Imports"
)]
pub async fn import_students(
    AuthClaims(claims): AuthClaims,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ImportResponse>), (StatusCode, String)> {
    handle_import(ImportKind::Student, claims, multipart).await
}

/// Bulk import teachers from an uploaded spreadsheet or CSV (Admin only)
#[utoipa::path(
    post,
    path = "/api/v1/imports/teachers",
    request_body(content = String, content_type = "multipart/form-data", description = "Multipart form with a single `file` field"),
    responses(
        (status = 201, description = "Import completed, possibly with row errors", body = ImportResponse),
        (status = 400, description = "Unreadable or empty file"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Imports"
)]
pub async fn import_teachers(
    AuthClaims(claims): AuthClaims,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ImportResponse>), (StatusCode, String)> {
    handle_import(ImportKind::Teacher, claims, multipart).await
}

/// Bulk import administrative staff (Admin only)
#[utoipa::path(
    post,
    path = "/api/v1/imports/admin-staff",
    request_body(content = String, content_type = "multipart/form-data", description = "Multipart form with a single `file` field"),
    responses(
        (status = 201, description = "Import completed, possibly with row errors", body = ImportResponse),
        (status = 400, description = "Unreadable or empty file"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Imports"
)]
pub async fn import_admin_staff(
    AuthClaims(claims): AuthClaims,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ImportResponse>), (StatusCode, String)> {
    handle_import(ImportKind::AdminStaff, claims, multipart).await
}

/// Bulk import support staff (Admin only)
#[utoipa::path(
    post,
    path = "/api/v1/imports/support-staff",
    request_body(content = String, content_type = "multipart/form-data", description = "Multipart form with a single `file` field"),
    responses(
        (status = 201, description = "Import completed, possibly with row errors", body = ImportResponse),
        (status = 400, description = "Unreadable or empty file"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Imports"
)]
pub async fn import_support_staff(
    AuthClaims(claims): AuthClaims,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ImportResponse>), (StatusCode, String)> {
    handle_import(ImportKind::SupportStaff, claims, multipart).await
}

async fn handle_import(
    kind: ImportKind,
    claims: crate::extractor::Claims,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ImportResponse>), (StatusCode, String)> {
    permission::is_admin(&claims)?;

    let saved = save_import_file(multipart).await?;

    let result = run_import(
        kind,
        &saved.path,
        &saved.stored_name,
        &saved.original_name,
        claims.user_id,
    )
    .await;

    // The temp file goes away on every exit path, parse failures included.
    remove_upload(&saved.path).await;

    let outcome =
        result.map_err(|e| (StatusCode::BAD_REQUEST, format!("Import failed: {:#}", e)))?;

    let response = ImportResponse {
        message: "Import completed".to_string(),
        total_records: outcome.total_records,
        success_count: outcome.success_count,
        error_count: outcome.error_count,
        errors: outcome.errors,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Import history, newest first (Admin/Principal)
#[utoipa::path(
    get,
    path = "/api/v1/imports/history",
    params(HistoryQueryParams),
    responses(
        (status = 200, description = "Import history retrieved", body = ImportHistoryListResponse),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Imports"
)]
pub async fn get_import_history(
    AuthClaims(claims): AuthClaims,
    Query(params): Query<HistoryQueryParams>,
) -> Result<(StatusCode, Json<ImportHistoryListResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let (records, total) = ImportHistoryRepository::new()
        .find_all_with_pagination(params.page, params.page_size)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = ImportHistoryListResponse {
        total,
        page: params.page,
        page_size: params.page_size,
        records: records
            .into_iter()
            .map(|r| ImportHistoryResponse {
                import_history_id: r.import_history_id,
                user_type: r.user_type,
                file_name: r.file_name,
                original_file_name: r.original_file_name,
                uploaded_by: r.uploaded_by,
                status: r.status,
                total_records: r.total_records,
                success_count: r.success_count,
                error_count: r.error_count,
                errors: r.errors,
                created_at: r.created_at,
            })
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}
