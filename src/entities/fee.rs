//! `SeaORM` Entity for fees table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{FeeStatusEnum, FeeTypeEnum};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "fees"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub fee_id: Uuid,
    pub student_id: Uuid,
    pub fee_type: FeeTypeEnum,
    pub amount: Decimal,
    pub paid_amount: Decimal,
    /// Holds `amount - paid_amount` whenever status is not paid.
    pub remaining_amount: Decimal,
    /// Unpaid balance carried forward from earlier months, snapshotted at
    /// creation time.
    pub arrears: Decimal,
    pub status: FeeStatusEnum,
    pub due_date: Date,
    pub payment_date: Option<Date>,
    pub recorded_by: Uuid,
    pub remarks: Option<String>,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    FeeId,
    StudentId,
    FeeType,
    Amount,
    PaidAmount,
    RemainingAmount,
    Arrears,
    Status,
    DueDate,
    PaymentDate,
    RecordedBy,
    Remarks,
    CreateAt,
    UpdateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    FeeId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    RecordedBy,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::FeeId => ColumnType::Uuid.def(),
            Self::StudentId => ColumnType::Uuid.def(),
            Self::FeeType => ColumnType::String(StringLen::N(16u32)).def(),
            Self::Amount => ColumnType::Decimal(Some((12u32, 2u32))).def(),
            Self::PaidAmount => ColumnType::Decimal(Some((12u32, 2u32))).def(),
            Self::RemainingAmount => ColumnType::Decimal(Some((12u32, 2u32))).def(),
            Self::Arrears => ColumnType::Decimal(Some((12u32, 2u32))).def(),
            Self::Status => ColumnType::String(StringLen::N(16u32)).def(),
            Self::DueDate => ColumnType::Date.def(),
            Self::PaymentDate => ColumnType::Date.def().null(),
            Self::RecordedBy => ColumnType::Uuid.def(),
            Self::Remarks => ColumnType::String(StringLen::None).def().null(),
            Self::CreateAt => ColumnType::DateTime.def(),
            Self::UpdateAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(super::student::Entity)
                .from(Column::StudentId)
                .to(super::student::Column::StudentId)
                .into(),
            Self::RecordedBy => Entity::belongs_to(super::user::Entity)
                .from(Column::RecordedBy)
                .to(super::user::Column::UserId)
                .into(),
        }
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
