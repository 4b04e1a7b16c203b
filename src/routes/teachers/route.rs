use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use super::dto::{
    TeacherListResponse, TeacherQueryParams, TeacherResponse, UpdateTeacherRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{TeacherRepository, TeacherUpdate, UserRepository};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/teachers", get(get_all_teachers))
        .route(
            "/api/v1/teachers/{teacher_id}",
            get(get_teacher_by_id)
                .put(update_teacher)
                .delete(delete_teacher),
        )
}

/// List teachers with pagination and name/employee-id search
#[utoipa::path(
    get,
    path = "/api/v1/teachers",
    params(TeacherQueryParams),
    responses(
        (status = 200, description = "Teachers retrieved", body = TeacherListResponse),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn get_all_teachers(
    AuthClaims(claims): AuthClaims,
    Query(params): Query<TeacherQueryParams>,
) -> Result<(StatusCode, Json<TeacherListResponse>), (StatusCode, String)> {
    permission::is_school_staff(&claims)?;

    let (records, total) = TeacherRepository::new()
        .find_all_with_pagination(params.page, params.page_size, params.search)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = TeacherListResponse {
        total,
        page: params.page,
        page_size: params.page_size,
        teachers: records
            .into_iter()
            .map(|(profile, account)| TeacherResponse::from_models(profile, account))
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get one teacher with account details
#[utoipa::path(
    get,
    path = "/api/v1/teachers/{teacher_id}",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher retrieved", body = TeacherResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn get_teacher_by_id(
    AuthClaims(_claims): AuthClaims,
    Path(teacher_id): Path<Uuid>,
) -> Result<(StatusCode, Json<TeacherResponse>), (StatusCode, String)> {
    let (profile, account) = TeacherRepository::new()
        .find_by_id(teacher_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Teacher not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(TeacherResponse::from_models(profile, account)),
    ))
}

/// Update a teacher's profile (Admin/Principal only)
#[utoipa::path(
    put,
    path = "/api/v1/teachers/{teacher_id}",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherRequest,
    responses(
        (status = 200, description = "Teacher updated", body = TeacherResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn update_teacher(
    AuthClaims(claims): AuthClaims,
    Path(teacher_id): Path<Uuid>,
    Json(payload): Json<UpdateTeacherRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let teacher_repo = TeacherRepository::new();

    let updates = TeacherUpdate {
        qualification: payload.qualification,
        subjects: payload.subjects,
        classes: payload.classes,
        experience_years: payload.experience_years,
        salary: payload.salary,
        contact_number: payload.contact_number,
    };

    teacher_repo.update(teacher_id, updates).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to update teacher: {}", e),
        )
    })?;

    let (profile, account) = teacher_repo
        .find_by_id(teacher_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Teacher not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(TeacherResponse::from_models(profile, account)),
    ))
}

/// Remove a teacher: profile is deleted, the account is soft-deleted
/// (Admin/Principal only)
#[utoipa::path(
    delete,
    path = "/api/v1/teachers/{teacher_id}",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher removed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    AuthClaims(claims): AuthClaims,
    Path(teacher_id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let teacher_repo = TeacherRepository::new();
    let (profile, _) = teacher_repo
        .find_by_id(teacher_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Teacher not found".to_string()))?;

    teacher_repo.delete(teacher_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to delete teacher: {}", e),
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
            "message": "Teacher removed",
            "teacher_id": teacher_id
        })),
    ))
}
