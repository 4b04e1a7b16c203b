use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::TransactionTrait;
use sea_orm::prelude::Decimal;
use uuid::Uuid;

use super::dto::{
    CreateStudentRequest, StudentListResponse, StudentQueryParams, StudentResponse,
    UpdateStudentRequest,
};
use crate::config::TEMP_PASSWORD_LENGTH;
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::extractor::AuthClaims;
use crate::import::roles;
use crate::middleware::permission;
use crate::repositories::{
    FeeRepository, StudentRepository, StudentUpdate, UserRepository,
};
use crate::utils::random::generate_random_string;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/students", post(create_student).get(get_all_students))
        .route(
            "/api/v1/students/{student_id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
}

/// Enroll a single student (Admin/Principal only)
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student enrolled", body = StudentResponse),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn create_student(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    if !roles::is_valid_email(&payload.email) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Invalid email address: {}", payload.email),
        ));
    }

    let user_repo = UserRepository::new();
    let student_repo = StudentRepository::new();

    let email_taken = user_repo.email_exists(&payload.email).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    if email_taken {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Email {} already exists", payload.email),
        ));
    }

    let roll_taken = student_repo
        .roll_number_exists(&payload.roll_number)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    if roll_taken {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Roll number {} already exists", payload.roll_number),
        ));
    }

    let temp_password = generate_random_string(TEMP_PASSWORD_LENGTH);
    let hashed_password =
        bcrypt::hash(&temp_password, bcrypt::DEFAULT_COST).map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to hash password: {}", e),
            )
        })?;

    let db = user_repo.get_connection();
    let user_id = Uuid::new_v4();
    let today = chrono::Utc::now().date_naive();

    let txn = db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let account = user_repo
        .create_in(
            &txn,
            user_id,
            payload.first_name.clone(),
            payload.last_name.clone(),
            payload.email.clone(),
            hashed_password,
            RoleEnum::Student,
            Some(claims.user_id),
        )
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                format!("Failed to create account: {}", e),
            )
        })?;

    let profile = student_repo
        .create_in(
            &txn,
            user_id,
            payload.roll_number.clone(),
            payload.class_name.clone(),
            payload.section.clone(),
            payload.gender.clone(),
            payload.father_name.clone(),
            payload.mother_name.clone(),
            payload.contact_number.clone(),
            payload.address.clone(),
            payload.monthly_fee,
            today,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                format!("Failed to create profile: {}", e),
            )
        })?;

    txn.commit().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    // Seed the first tuition record; enrollment already succeeded, so a
    // failure here is only logged.
    if payload.monthly_fee > Decimal::ZERO {
        if let Err(e) = FeeRepository::new()
            .create_initial_fee_record(profile.student_id, claims.user_id, payload.monthly_fee)
            .await
        {
            tracing::warn!(
                "Failed to seed initial fee record for student {}: {:#}",
                profile.student_id,
                e
            );
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(StudentResponse::from_models(profile, Some(account))),
    ))
}

/// List students with pagination, class filter and name/roll search
#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(StudentQueryParams),
    responses(
        (status = 200, description = "Students retrieved", body = StudentListResponse),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_all_students(
    AuthClaims(claims): AuthClaims,
    Query(params): Query<StudentQueryParams>,
) -> Result<(StatusCode, Json<StudentListResponse>), (StatusCode, String)> {
    permission::is_school_staff(&claims)?;

    let (records, total) = StudentRepository::new()
        .find_all_with_pagination(params.page, params.page_size, params.class, params.search)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = StudentListResponse {
        total,
        page: params.page,
        page_size: params.page_size,
        students: records
            .into_iter()
            .map(|(profile, account)| StudentResponse::from_models(profile, account))
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get one student with account details
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student retrieved", body = StudentResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_student_by_id(
    AuthClaims(_claims): AuthClaims,
    Path(student_id): Path<Uuid>,
) -> Result<(StatusCode, Json<StudentResponse>), (StatusCode, String)> {
    let (profile, account) = StudentRepository::new()
        .find_by_id(student_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Student not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(StudentResponse::from_models(profile, account)),
    ))
}

/// Update a student's profile (Admin/Principal only)
#[utoipa::path(
    put,
    path = "/api/v1/students/{student_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn update_student(
    AuthClaims(claims): AuthClaims,
    Path(student_id): Path<Uuid>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let student_repo = StudentRepository::new();

    let updates = StudentUpdate {
        class_name: payload.class_name,
        section: payload.section,
        contact_number: payload.contact_number,
        address: payload.address,
        monthly_fee: payload.monthly_fee,
    };

    student_repo.update(student_id, updates).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to update student: {}", e),
        )
    })?;

    let (profile, account) = student_repo
        .find_by_id(student_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Student not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(StudentResponse::from_models(profile, account)),
    ))
}

/// Remove a student: profile is deleted, the account is soft-deleted
/// (Admin/Principal only)
#[utoipa::path(
    delete,
    path = "/api/v1/students/{student_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student removed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn delete_student(
    AuthClaims(claims): AuthClaims,
    Path(student_id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let student_repo = StudentRepository::new();
    let (profile, _) = student_repo
        .find_by_id(student_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Student not found".to_string()))?;

    student_repo.delete(student_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to delete student: {}", e),
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
            "message": "Student removed",
            "student_id": student_id
        })),
    ))
}
