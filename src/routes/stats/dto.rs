use sea_orm::prelude::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::import_history;
use crate::entities::sea_orm_active_enums::{ImportStatusEnum, RoleEnum};

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub total_students: u64,
    pub total_teachers: u64,
    pub total_admin_staff: u64,
    pub total_support_staff: u64,
    /// Payments received against fees due in the current month.
    pub fees_collected_this_month: Decimal,
    /// Open balances on fees due in the current month.
    pub fees_outstanding_this_month: Decimal,
    pub last_import: Option<LastImportSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LastImportSummary {
    pub user_type: RoleEnum,
    pub status: ImportStatusEnum,
    pub total_records: i32,
    pub success_count: i32,
    pub error_count: i32,
    pub created_at: chrono::NaiveDateTime,
}

impl From<import_history::Model> for LastImportSummary {
    fn from(record: import_history::Model) -> Self {
        Self {
            user_type: record.user_type,
            status: record.status,
            total_records: record.total_records,
            success_count: record.success_count,
            error_count: record.error_count,
            created_at: record.created_at,
        }
    }
}
