use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::fee;
use crate::entities::sea_orm_active_enums::{FeeStatusEnum, FeeTypeEnum};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateFeeRequest {
    pub student_id: Uuid,

    #[schema(example = "tuition")]
    pub fee_type: FeeTypeEnum,

    #[schema(example = "1500")]
    pub amount: Decimal,

    pub due_date: NaiveDate,

    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RecordPaymentRequest {
    #[schema(example = "400")]
    pub paid_amount: Decimal,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct OverrideStatusRequest {
    #[schema(example = "paid")]
    pub status: FeeStatusEnum,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeeResponse {
    pub fee_id: Uuid,
    pub student_id: Uuid,
    pub fee_type: FeeTypeEnum,
    pub amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    pub arrears: Decimal,
    pub status: FeeStatusEnum,
    pub due_date: NaiveDate,
    pub payment_date: Option<NaiveDate>,
    pub recorded_by: Uuid,
    pub remarks: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<fee::Model> for FeeResponse {
    fn from(record: fee::Model) -> Self {
        Self {
            fee_id: record.fee_id,
            student_id: record.student_id,
            fee_type: record.fee_type,
            amount: record.amount,
            paid_amount: record.paid_amount,
            remaining_amount: record.remaining_amount,
            arrears: record.arrears,
            status: record.status,
            due_date: record.due_date,
            payment_date: record.payment_date,
            recorded_by: record.recorded_by,
            remarks: record.remarks,
            created_at: record.create_at,
            updated_at: record.update_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeeListResponse {
    pub total: usize,
    pub fees: Vec<FeeResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArrearsResponse {
    pub student_id: Uuid,
    #[schema(example = "700")]
    pub arrears: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrphanCleanupResponse {
    pub removed: u64,
}
