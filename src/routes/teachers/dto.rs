use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{teacher, user};

fn string_list(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateTeacherRequest {
    pub qualification: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub classes: Option<Vec<String>>,
    pub experience_years: Option<i32>,
    pub salary: Option<Decimal>,
    pub contact_number: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub teacher_id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[schema(example = "TCH250001")]
    pub employee_id: String,
    pub qualification: String,
    pub subjects: Vec<String>,
    pub classes: Vec<String>,
    pub experience_years: i32,
    pub salary: Decimal,
    pub contact_number: String,
    pub joining_date: NaiveDate,
    pub is_active: bool,
}

impl TeacherResponse {
    pub fn from_models(profile: teacher::Model, account: Option<user::Model>) -> Self {
        let (first_name, last_name, email, is_active) = match account {
            Some(a) => (a.first_name, a.last_name, a.email, a.is_active),
            None => (String::new(), String::new(), String::new(), false),
        };

        Self {
            teacher_id: profile.teacher_id,
            user_id: profile.user_id,
            first_name,
            last_name,
            email,
            employee_id: profile.employee_id,
            qualification: profile.qualification,
            subjects: string_list(profile.subjects),
            classes: string_list(profile.classes),
            experience_years: profile.experience_years,
            salary: profile.salary,
            contact_number: profile.contact_number,
            joining_date: profile.joining_date,
            is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherListResponse {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub teachers: Vec<TeacherResponse>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct TeacherQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}
