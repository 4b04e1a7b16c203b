use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{student, user};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateStudentRequest {
    #[schema(example = "Aisha")]
    pub first_name: String,

    #[schema(example = "Khan")]
    pub last_name: String,

    #[schema(example = "stdaishakhan@school.edu")]
    pub email: String,

    #[schema(example = "R-2026-041")]
    pub roll_number: String,

    #[schema(example = "8")]
    pub class_name: String,

    #[schema(example = "B")]
    pub section: String,

    #[schema(example = "female")]
    pub gender: String,

    pub father_name: String,
    pub mother_name: String,

    #[schema(example = "0301-1234567")]
    pub contact_number: String,

    pub address: Option<String>,

    #[schema(example = "1500")]
    pub monthly_fee: Decimal,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub monthly_fee: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub student_id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roll_number: String,
    pub class_name: String,
    pub section: String,
    pub gender: String,
    pub father_name: String,
    pub mother_name: String,
    pub contact_number: String,
    pub address: Option<String>,
    pub monthly_fee: Decimal,
    pub admission_date: NaiveDate,
    pub is_active: bool,
}

impl StudentResponse {
    pub fn from_models(profile: student::Model, account: Option<user::Model>) -> Self {
        let (first_name, last_name, email, is_active) = match account {
            Some(a) => (a.first_name, a.last_name, a.email, a.is_active),
            None => (String::new(), String::new(), String::new(), false),
        };

        Self {
            student_id: profile.student_id,
            user_id: profile.user_id,
            first_name,
            last_name,
            email,
            roll_number: profile.roll_number,
            class_name: profile.class_name,
            section: profile.section,
            gender: profile.gender,
            father_name: profile.father_name,
            mother_name: profile.mother_name,
            contact_number: profile.contact_number,
            address: profile.address,
            monthly_fee: profile.monthly_fee,
            admission_date: profile.admission_date,
            is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListResponse {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub students: Vec<StudentResponse>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct StudentQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub class: Option<String>,
    pub search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}
