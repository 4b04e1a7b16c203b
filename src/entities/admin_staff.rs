//! `SeaORM` Entity for admin_staff table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "admin_staff"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub staff_id: Uuid,
    pub user_id: Uuid,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub salary: Decimal,
    pub contact_number: String,
    /// Responsibilities, stored as a JSON array of strings.
    pub responsibilities: Json,
    pub joining_date: Date,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    StaffId,
    UserId,
    EmployeeId,
    Department,
    Designation,
    Salary,
    ContactNumber,
    Responsibilities,
    JoiningDate,
    CreateAt,
    UpdateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    StaffId,
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
            Self::StaffId => ColumnType::Uuid.def(),
            Self::UserId => ColumnType::Uuid.def(),
            Self::EmployeeId => ColumnType::String(StringLen::N(32u32)).def().unique(),
            Self::Department => ColumnType::String(StringLen::None).def(),
            Self::Designation => ColumnType::String(StringLen::None).def(),
            Self::Salary => ColumnType::Decimal(Some((12u32, 2u32))).def(),
            Self::ContactNumber => ColumnType::String(StringLen::N(32u32)).def(),
            Self::Responsibilities => ColumnType::JsonBinary.def(),
            Self::JoiningDate => ColumnType::Date.def(),
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
