use sea_orm_migration::prelude::*;

use super::m20250810_093000_create_table_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImportHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImportHistory::ImportHistoryId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ImportHistory::UserType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImportHistory::FileName).string().not_null())
                    .col(
                        ColumnDef::new(ImportHistory::OriginalFileName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImportHistory::UploadedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(ImportHistory::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImportHistory::TotalRecords)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImportHistory::SuccessCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImportHistory::ErrorCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImportHistory::Errors)
                            .custom("jsonb")
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImportHistory::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_import_history_uploaded_by")
                            .from_tbl(ImportHistory::Table)
                            .from_col(ImportHistory::UploadedBy)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImportHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ImportHistory {
    Table,
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
