use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::{ImportStatusEnum, RoleEnum};
use crate::import::RowError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ImportResponse {
    #[schema(example = "Import completed")]
    pub message: String,
    pub total_records: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<RowError>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImportHistoryResponse {
    pub import_history_id: Uuid,
    pub user_type: RoleEnum,
    pub file_name: String,
    pub original_file_name: String,
    pub uploaded_by: Uuid,
    pub status: ImportStatusEnum,
    pub total_records: i32,
    pub success_count: i32,
    pub error_count: i32,
    /// `{row, message}` objects, ordered by row.
    #[schema(value_type = Object)]
    pub errors: serde_json::Value,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImportHistoryListResponse {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub records: Vec<ImportHistoryResponse>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct HistoryQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}
