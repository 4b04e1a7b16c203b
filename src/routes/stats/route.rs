use axum::{Json, Router, http::StatusCode, routing::get};

use super::dto::{DashboardResponse, LastImportSummary};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{
    FeeRepository, ImportHistoryRepository, StaffRepository, StudentRepository, TeacherRepository,
};

pub fn create_route() -> Router {
    Router::new().route("/api/v1/stats/dashboard", get(get_dashboard))
}

/// Headline numbers for the admin dashboard (Admin/Principal only)
#[utoipa::path(
    get,
    path = "/api/v1/stats/dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardResponse),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Statistics"
)]
pub async fn get_dashboard(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<DashboardResponse>), (StatusCode, String)> {
    permission::is_admin_or_principal(&claims)?;

    let db_err = |e: anyhow::Error| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    };

    let staff_repo = StaffRepository::new();

    let total_students = StudentRepository::new().count().await.map_err(db_err)?;
    let total_teachers = TeacherRepository::new().count().await.map_err(db_err)?;
    let total_admin_staff = staff_repo.count_admin().await.map_err(db_err)?;
    let total_support_staff = staff_repo.count_support().await.map_err(db_err)?;

    let (fees_collected_this_month, fees_outstanding_this_month) = FeeRepository::new()
        .monthly_totals()
        .await
        .map_err(db_err)?;

    let last_import = ImportHistoryRepository::new()
        .find_latest()
        .await
        .map_err(db_err)?
        .map(LastImportSummary::from);

    let response = DashboardResponse {
        total_students,
        total_teachers,
        total_admin_staff,
        total_support_staff,
        fees_collected_this_month,
        fees_outstanding_this_month,
        last_import,
    };

    Ok((StatusCode::OK, Json(response)))
}
