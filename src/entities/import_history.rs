//! `SeaORM` Entity for import_history table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{ImportStatusEnum, RoleEnum};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "import_history"
    }
}

/// Audit record of one bulk import run. Written once per completed (or
/// wholly failed) import; never updated afterwards.
#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub import_history_id: Uuid,
    pub user_type: RoleEnum,
    pub file_name: String,
    pub original_file_name: String,
    pub uploaded_by: Uuid,
    pub status: ImportStatusEnum,
    pub total_records: i32,
    pub success_count: i32,
    pub error_count: i32,
    /// JSON array of `{row, message}` objects, ordered by row.
    pub errors: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    ImportHistoryId,
    UserType,
    FileName,
    OriginalFileName,
    UploadedBy,
    Status,
    TotalRecords,
    SuccessCount,
    ErrorCount,
    Errors,
    CreatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    ImportHistoryId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    UploadedBy,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::ImportHistoryId => ColumnType::Uuid.def(),
            Self::UserType => ColumnType::String(StringLen::N(32u32)).def(),
            Self::FileName => ColumnType::String(StringLen::None).def(),
            Self::OriginalFileName => ColumnType::String(StringLen::None).def(),
            Self::UploadedBy => ColumnType::Uuid.def(),
            Self::Status => ColumnType::String(StringLen::N(16u32)).def(),
            Self::TotalRecords => ColumnType::Integer.def(),
            Self::SuccessCount => ColumnType::Integer.def(),
            Self::ErrorCount => ColumnType::Integer.def(),
            Self::Errors => ColumnType::JsonBinary.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::UploadedBy => Entity::belongs_to(super::user::Entity)
                .from(Column::UploadedBy)
                .to(super::user::Column::UserId)
                .into(),
        }
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UploadedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
