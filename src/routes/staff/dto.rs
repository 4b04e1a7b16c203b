use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{admin_staff, support_staff, user};

fn string_list(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

fn account_fields(account: Option<user::Model>) -> (String, String, String, bool) {
    match account {
        Some(a) => (a.first_name, a.last_name, a.email, a.is_active),
        None => (String::new(), String::new(), String::new(), false),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStaffResponse {
    pub staff_id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub salary: Decimal,
    pub contact_number: String,
    pub responsibilities: Vec<String>,
    pub joining_date: NaiveDate,
    pub is_active: bool,
}

impl AdminStaffResponse {
    pub fn from_models(profile: admin_staff::Model, account: Option<user::Model>) -> Self {
        let (first_name, last_name, email, is_active) = account_fields(account);
        Self {
            staff_id: profile.staff_id,
            user_id: profile.user_id,
            first_name,
            last_name,
            email,
            employee_id: profile.employee_id,
            department: profile.department,
            designation: profile.designation,
            salary: profile.salary,
            contact_number: profile.contact_number,
            responsibilities: string_list(profile.responsibilities),
            joining_date: profile.joining_date,
            is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SupportStaffResponse {
    pub staff_id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub employee_id: String,
    #[schema(example = "driver")]
    pub staff_role: String,
    pub salary: Decimal,
    pub contact_number: String,
    pub duties: Vec<String>,
    pub working_days: Vec<String>,
    pub joining_date: NaiveDate,
    pub is_active: bool,
}

impl SupportStaffResponse {
    pub fn from_models(profile: support_staff::Model, account: Option<user::Model>) -> Self {
        let (first_name, last_name, email, is_active) = account_fields(account);
        Self {
            staff_id: profile.staff_id,
            user_id: profile.user_id,
            first_name,
            last_name,
            email,
            employee_id: profile.employee_id,
            staff_role: profile.staff_role,
            salary: profile.salary,
            contact_number: profile.contact_number,
            duties: string_list(profile.duties),
            working_days: string_list(profile.working_days),
            joining_date: profile.joining_date,
            is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStaffListResponse {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub staff: Vec<AdminStaffResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SupportStaffListResponse {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub staff: Vec<SupportStaffResponse>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct StaffQueryParams {
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
