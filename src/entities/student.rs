//! `SeaORM` Entity for students table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "students"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub student_id: Uuid,
    pub user_id: Uuid,
    pub roll_number: String,
    pub class_name: String,
    pub section: String,
    pub gender: String,
    pub father_name: String,
    pub mother_name: String,
    pub contact_number: String,
    pub address: Option<String>,
    pub monthly_fee: Decimal,
    pub admission_date: Date,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    StudentId,
    UserId,
    RollNumber,
    ClassName,
    Section,
    Gender,
    FatherName,
    MotherName,
    ContactNumber,
    Address,
    MonthlyFee,
    AdmissionDate,
    CreateAt,
    UpdateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    StudentId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::StudentId => ColumnType::Uuid.def(),
            Self::UserId => ColumnType::Uuid.def(),
            Self::RollNumber => ColumnType::String(StringLen::N(32u32)).def().unique(),
            Self::ClassName => ColumnType::String(StringLen::N(32u32)).def(),
            Self::Section => ColumnType::String(StringLen::N(8u32)).def(),
            Self::Gender => ColumnType::String(StringLen::N(16u32)).def(),
            Self::FatherName => ColumnType::String(StringLen::None).def(),
            Self::MotherName => ColumnType::String(StringLen::None).def(),
            Self::ContactNumber => ColumnType::String(StringLen::N(32u32)).def(),
            Self::Address => ColumnType::String(StringLen::None).def().null(),
            Self::MonthlyFee => ColumnType::Decimal(Some((12u32, 2u32))).def(),
            Self::AdmissionDate => ColumnType::Date.def(),
            Self::CreateAt => ColumnType::DateTime.def(),
            Self::UpdateAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(super::user::Entity)
                .from(Column::UserId)
                .to(super::user::Column::UserId)
                .into(),
        }
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
