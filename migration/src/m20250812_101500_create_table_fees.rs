use sea_orm_migration::prelude::*;

use super::m20250810_093000_create_table_users::Users;
use super::m20250810_094500_create_profile_tables::Students;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Fees::FeeId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Fees::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Fees::FeeType).string_len(16).not_null())
                    .col(ColumnDef::new(Fees::Amount).decimal_len(12, 2).not_null())
                    .col(
                        ColumnDef::new(Fees::PaidAmount)
                            .decimal_len(12, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Fees::RemainingAmount)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Fees::Arrears)
                            .decimal_len(12, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Fees::Status)
                            .string_len(16)
                            .not_null()
                            .default("unpaid"),
                    )
                    .col(ColumnDef::new(Fees::DueDate).date().not_null())
                    .col(ColumnDef::new(Fees::PaymentDate).date().null())
                    .col(ColumnDef::new(Fees::RecordedBy).uuid().not_null())
                    .col(ColumnDef::new(Fees::Remarks).string().null())
                    .col(
                        ColumnDef::new(Fees::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Fees::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fees_student")
                            .from_tbl(Fees::Table)
                            .from_col(Fees::StudentId)
                            .to_tbl(Students::Table)
                            .to_col(Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fees_recorded_by")
                            .from_tbl(Fees::Table)
                            .from_col(Fees::RecordedBy)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One fee record per student, type and due month; lookups are always
        // by student and due date.
        manager
            .create_index(
                Index::create()
                    .name("idx_fees_student_due")
                    .table(Fees::Table)
                    .col(Fees::StudentId)
                    .col(Fees::FeeType)
                    .col(Fees::DueDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Fees {
    Table,
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
