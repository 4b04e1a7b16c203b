use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, patch, post},
};
use sea_orm::prelude::Decimal;
use uuid::Uuid;

use super::dto::{
    ArrearsResponse, CreateFeeRequest, FeeListResponse, FeeResponse, OrphanCleanupResponse,
    OverrideStatusRequest, RecordPaymentRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{FeeRepository, StudentRepository};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/fees", post(create_fee))
        .route("/api/v1/fees/cleanup-orphaned", post(cleanup_orphaned_fees))
        .route("/api/v1/fees/{fee_id}", get(get_fee_by_id).delete(delete_fee))
        .route("/api/v1/fees/{fee_id}/payment", patch(record_payment))
        .route("/api/v1/fees/{fee_id}/status", patch(override_status))
        .route("/api/v1/students/{student_id}/fees", get(get_student_fees))
        .route(
            "/api/v1/students/{student_id}/arrears",
            get(get_student_arrears),
        )
}

/// Record a fee against a student (Admin/Principal only)
#[utoipa::path(
    post,
    path = "/api/v1/fees",
    request_body = CreateFeeRequest,
    responses(
        (status = 201, description = "Fee recorded", body = FeeResponse),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Fees"
)]
pub async fn create_fee(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateFeeRequest>,
) -> Result<(StatusCode, Json<FeeResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    if payload.amount <= Decimal::ZERO {
        return Err((
            StatusCode::BAD_REQUEST,
            "Fee amount must be positive".to_string(),
        ));
    }

    StudentRepository::new()
        .find_by_id(payload.student_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Student not found".to_string()))?;

    let record = FeeRepository::new()
        .create_manual(
            payload.student_id,
            payload.fee_type,
            payload.amount,
            payload.due_date,
            claims.user_id,
            payload.remarks,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                format!("Failed to record fee: {}", e),
            )
        })?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Get one fee record
#[utoipa::path(
    get,
    path = "/api/v1/fees/{fee_id}",
    params(
        ("fee_id" = Uuid, Path, description = "Fee ID")
    ),
    responses(
        (status = 200, description = "Fee retrieved", body = FeeResponse),
        (status = 404, description = "Fee not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Fees"
)]
pub async fn get_fee_by_id(
    AuthClaims(claims): AuthClaims,
    Path(fee_id): Path<Uuid>,
) -> Result<(StatusCode, Json<FeeResponse>), (StatusCode, String)> {
    permission::is_school_staff(&claims)?;

    let record = FeeRepository::new()
        .find_by_id(fee_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Fee not found".to_string()))?;

    Ok((StatusCode::OK, Json(record.into())))
}

/// All fee records for a student, newest due date first
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}/fees",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Fees retrieved", body = FeeListResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Fees"
)]
pub async fn get_student_fees(
    AuthClaims(_claims): AuthClaims,
    Path(student_id): Path<Uuid>,
) -> Result<(StatusCode, Json<FeeListResponse>), (StatusCode, String)> {
    StudentRepository::new()
        .find_by_id(student_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Student not found".to_string()))?;

    let records = FeeRepository::new()
        .find_by_student(student_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = FeeListResponse {
        total: records.len(),
        fees: records.into_iter().map(FeeResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Carried-forward unpaid balance from months before the current one
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}/arrears",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Arrears computed", body = ArrearsResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Fees"
)]
pub async fn get_student_arrears(
    AuthClaims(claims): AuthClaims,
    Path(student_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ArrearsResponse>), (StatusCode, String)> {
    permission::is_school_staff(&claims)?;

    StudentRepository::new()
        .find_by_id(student_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Student not found".to_string()))?;

    let arrears = FeeRepository::new()
        .calculate_arrears(student_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((
        StatusCode::OK,
        Json(ArrearsResponse {
            student_id,
            arrears,
        }),
    ))
}

/// Record a payment; status, remaining amount and payment date are derived
#[utoipa::path(
    patch,
    path = "/api/v1/fees/{fee_id}/payment",
    params(
        ("fee_id" = Uuid, Path, description = "Fee ID")
    ),
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = FeeResponse),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Fee not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Fees"
)]
pub async fn record_payment(
    AuthClaims(claims): AuthClaims,
    Path(fee_id): Path<Uuid>,
    Json(payload): Json<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<FeeResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    if payload.paid_amount < Decimal::ZERO {
        return Err((
            StatusCode::BAD_REQUEST,
            "Paid amount cannot be negative".to_string(),
        ));
    }

    let record = FeeRepository::new()
        .record_payment(fee_id, payload.paid_amount, claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to record payment: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Fee not found".to_string()))?;

    Ok((StatusCode::OK, Json(record.into())))
}

/// Explicitly override a fee's status; `paid` settles the record in full
#[utoipa::path(
    patch,
    path = "/api/v1/fees/{fee_id}/status",
    params(
        ("fee_id" = Uuid, Path, description = "Fee ID")
    ),
    request_body = OverrideStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = FeeResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Fee not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Fees"
)]
pub async fn override_status(
    AuthClaims(claims): AuthClaims,
    Path(fee_id): Path<Uuid>,
    Json(payload): Json<OverrideStatusRequest>,
) -> Result<(StatusCode, Json<FeeResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let record = FeeRepository::new()
        .override_status(fee_id, payload.status, claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to update status: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Fee not found".to_string()))?;

    Ok((StatusCode::OK, Json(record.into())))
}

/// Delete a fee record (Admin/Principal only)
#[utoipa::path(
    delete,
    path = "/api/v1/fees/{fee_id}",
    params(
        ("fee_id" = Uuid, Path, description = "Fee ID")
    ),
    responses(
        (status = 204, description = "Fee deleted"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Fees"
)]
pub async fn delete_fee(
    AuthClaims(claims): AuthClaims,
    Path(fee_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    FeeRepository::new().delete(fee_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to delete fee: {}", e),
        )
    })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove fee records left behind by deleted or deactivated students
/// (Admin only)
#[utoipa::path(
    post,
    path = "/api/v1/fees/cleanup-orphaned",
    responses(
        (status = 200, description = "Cleanup completed", body = OrphanCleanupResponse),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Fees"
)]
pub async fn cleanup_orphaned_fees(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<OrphanCleanupResponse>), (StatusCode, String)> {
    permission::is_admin(&claims)?;

    let removed = FeeRepository::new().delete_orphaned().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Cleanup failed: {}", e),
        )
    })?;

    Ok((StatusCode::OK, Json(OrphanCleanupResponse { removed })))
}
