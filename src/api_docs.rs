use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::entities::sea_orm_active_enums::{
    FeeStatusEnum, FeeTypeEnum, ImportStatusEnum, RoleEnum,
};
use crate::import::pipeline::RowError;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::route::health_check,
        routes::imports::route::import_students,
        routes::imports::route::import_teachers,
        routes::imports::route::import_admin_staff,
        routes::imports::route::import_support_staff,
        routes::imports::route::get_import_history,
        routes::students::route::create_student,
        routes::students::route::get_all_students,
        routes::students::route::get_student_by_id,
        routes::students::route::update_student,
        routes::students::route::delete_student,
        routes::teachers::route::get_all_teachers,
        routes::teachers::route::get_teacher_by_id,
        routes::teachers::route::update_teacher,
        routes::teachers::route::delete_teacher,
        routes::staff::route::get_all_admin_staff,
        routes::staff::route::get_admin_staff_by_id,
        routes::staff::route::delete_admin_staff,
        routes::staff::route::get_all_support_staff,
        routes::staff::route::get_support_staff_by_id,
        routes::staff::route::delete_support_staff,
        routes::fees::route::create_fee,
        routes::fees::route::get_fee_by_id,
        routes::fees::route::get_student_fees,
        routes::fees::route::get_student_arrears,
        routes::fees::route::record_payment,
        routes::fees::route::override_status,
        routes::fees::route::delete_fee,
        routes::fees::route::cleanup_orphaned_fees,
        routes::notices::route::create_notice,
        routes::notices::route::get_all_notices,
        routes::notices::route::get_notice_by_id,
        routes::notices::route::update_notice,
        routes::notices::route::delete_notice,
        routes::stats::route::get_dashboard,
    ),
    components(schemas(
        RoleEnum,
        FeeStatusEnum,
        FeeTypeEnum,
        ImportStatusEnum,
        RowError,
        routes::imports::dto::ImportResponse,
        routes::imports::dto::ImportHistoryResponse,
        routes::imports::dto::ImportHistoryListResponse,
        routes::students::dto::CreateStudentRequest,
        routes::students::dto::UpdateStudentRequest,
        routes::students::dto::StudentResponse,
        routes::students::dto::StudentListResponse,
        routes::teachers::dto::UpdateTeacherRequest,
        routes::teachers::dto::TeacherResponse,
        routes::teachers::dto::TeacherListResponse,
        routes::staff::dto::AdminStaffResponse,
        routes::staff::dto::AdminStaffListResponse,
        routes::staff::dto::SupportStaffResponse,
        routes::staff::dto::SupportStaffListResponse,
        routes::fees::dto::CreateFeeRequest,
        routes::fees::dto::RecordPaymentRequest,
        routes::fees::dto::OverrideStatusRequest,
        routes::fees::dto::FeeResponse,
        routes::fees::dto::FeeListResponse,
        routes::fees::dto::ArrearsResponse,
        routes::fees::dto::OrphanCleanupResponse,
        routes::notices::dto::CreateNoticeRequest,
        routes::notices::dto::UpdateNoticeRequest,
        routes::notices::dto::NoticeResponse,
        routes::notices::dto::NoticeListResponse,
        routes::stats::dto::DashboardResponse,
        routes::stats::dto::LastImportSummary,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Imports", description = "Bulk spreadsheet/CSV imports and their audit trail"),
        (name = "Students", description = "Student profiles"),
        (name = "Teachers", description = "Teacher profiles"),
        (name = "Staff", description = "Administrative and support staff profiles"),
        (name = "Fees", description = "Fee records, payments and arrears"),
        (name = "Notices", description = "Notice board"),
        (name = "Statistics", description = "Dashboard aggregates"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
