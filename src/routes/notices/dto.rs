use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::notice;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateNoticeRequest {
    #[schema(example = "Parent-teacher meeting")]
    pub title: String,

    pub body: String,

    /// all, students, teachers or staff
    #[serde(default = "default_audience")]
    #[schema(example = "all")]
    pub audience: String,

    #[serde(default)]
    pub is_pinned: bool,
}

fn default_audience() -> String {
    "all".to_string()
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateNoticeRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub audience: Option<String>,
    pub is_pinned: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoticeResponse {
    pub notice_id: Uuid,
    pub title: String,
    pub body: String,
    pub audience: String,
    pub posted_by: Uuid,
    pub is_pinned: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<notice::Model> for NoticeResponse {
    fn from(record: notice::Model) -> Self {
        Self {
            notice_id: record.notice_id,
            title: record.title,
            body: record.body,
            audience: record.audience,
            posted_by: record.posted_by,
            is_pinned: record.is_pinned,
            created_at: record.create_at,
            updated_at: record.update_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoticeListResponse {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub notices: Vec<NoticeResponse>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct NoticeQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub audience: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}
