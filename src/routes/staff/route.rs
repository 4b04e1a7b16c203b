use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use super::dto::{
    AdminStaffListResponse, AdminStaffResponse, StaffQueryParams, SupportStaffListResponse,
    SupportStaffResponse,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{StaffRepository, UserRepository};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/staff/admin", get(get_all_admin_staff))
        .route(
            "/api/v1/staff/admin/{staff_id}",
            get(get_admin_staff_by_id).delete(delete_admin_staff),
        )
        .route("/api/v1/staff/support", get(get_all_support_staff))
        .route(
            "/api/v1/staff/support/{staff_id}",
            get(get_support_staff_by_id).delete(delete_support_staff),
        )
}

/// List administrative staff
#[utoipa::path(
    get,
    path = "/api/v1/staff/admin",
    params(StaffQueryParams),
    responses(
        (status = 200, description = "Staff retrieved", body = AdminStaffListResponse),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn get_all_admin_staff(
    AuthClaims(claims): AuthClaims,
    Query(params): Query<StaffQueryParams>,
) -> Result<(StatusCode, Json<AdminStaffListResponse>), (StatusCode, String)> {
    permission::is_school_staff(&claims)?;

    let (records, total) = StaffRepository::new()
        .find_all_admin_with_pagination(params.page, params.page_size, params.search)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = AdminStaffListResponse {
        total,
        page: params.page,
        page_size: params.page_size,
        staff: records
            .into_iter()
            .map(|(profile, account)| AdminStaffResponse::from_models(profile, account))
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get one administrative staff member
#[utoipa::path(
    get,
    path = "/api/v1/staff/admin/{staff_id}",
    params(
        ("staff_id" = Uuid, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member retrieved", body = AdminStaffResponse),
        (status = 404, description = "Staff member not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn get_admin_staff_by_id(
    AuthClaims(_claims): AuthClaims,
    Path(staff_id): Path<Uuid>,
) -> Result<(StatusCode, Json<AdminStaffResponse>), (StatusCode, String)> {
    let (profile, account) = StaffRepository::new()
        .find_admin_by_id(staff_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Staff member not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(AdminStaffResponse::from_models(profile, account)),
    ))
}

/// Remove an administrative staff member (Admin/Principal only)
#[utoipa::path(
    delete,
    path = "/api/v1/staff/admin/{staff_id}",
    params(
        ("staff_id" = Uuid, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member removed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Staff member not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn delete_admin_staff(
    AuthClaims(claims): AuthClaims,
    Path(staff_id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let staff_repo = StaffRepository::new();
    let (profile, _) = staff_repo
        .find_admin_by_id(staff_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Staff member not found".to_string()))?;

    staff_repo.delete_admin(staff_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to delete staff member: {}", e),
        )
    })?;

    UserRepository::new()
        .soft_delete(profile.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to deactivate account: {}", e),
            )
        })?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Staff member removed",
            "staff_id": staff_id
        })),
    ))
}

/// List support staff
#[utoipa::path(
    get,
    path = "/api/v1/staff/support",
    params(StaffQueryParams),
    responses(
        (status = 200, description = "Staff retrieved", body = SupportStaffListResponse),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn get_all_support_staff(
    AuthClaims(claims): AuthClaims,
    Query(params): Query<StaffQueryParams>,
) -> Result<(StatusCode, Json<SupportStaffListResponse>), (StatusCode, String)> {
    permission::is_school_staff(&claims)?;

    let (records, total) = StaffRepository::new()
        .find_all_support_with_pagination(params.page, params.page_size, params.search)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = SupportStaffListResponse {
        total,
        page: params.page,
        page_size: params.page_size,
        staff: records
            .into_iter()
            .map(|(profile, account)| SupportStaffResponse::from_models(profile, account))
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get one support staff member
#[utoipa::path(
    get,
    path = "/api/v1/staff/support/{staff_id}",
    params(
        ("staff_id" = Uuid, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member retrieved", body = SupportStaffResponse),
        (status = 404, description = "Staff member not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn get_support_staff_by_id(
    AuthClaims(_claims): AuthClaims,
    Path(staff_id): Path<Uuid>,
) -> Result<(StatusCode, Json<SupportStaffResponse>), (StatusCode, String)> {
    let (profile, account) = StaffRepository::new()
        .find_support_by_id(staff_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Staff member not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(SupportStaffResponse::from_models(profile, account)),
    ))
}

/// Remove a support staff member (Admin/Principal only)
#[utoipa::path(
    delete,
    path = "/api/v1/staff/support/{staff_id}",
    params(
        ("staff_id" = Uuid, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member removed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Staff member not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn delete_support_staff(
    AuthClaims(claims): AuthClaims,
    Path(staff_id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let staff_repo = StaffRepository::new();
    let (profile, _) = staff_repo
        .find_support_by_id(staff_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Staff member not found".to_string()))?;

    staff_repo.delete_support(staff_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to delete staff member: {}", e),
        )
    })?;

    UserRepository::new()
        .soft_delete(profile.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to deactivate account: {}", e),
            )
        })?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Staff member removed",
            "staff_id": staff_id
        })),
    ))
}
