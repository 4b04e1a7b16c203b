use sea_orm_migration::prelude::*;

use super::m20250810_093000_create_table_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One profile table per user type; every profile row points back at
        // the owning account.
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Students::RollNumber)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::ClassName).string_len(32).not_null())
                    .col(ColumnDef::new(Students::Section).string_len(8).not_null())
                    .col(ColumnDef::new(Students::Gender).string_len(16).not_null())
                    .col(ColumnDef::new(Students::FatherName).string().not_null())
                    .col(ColumnDef::new(Students::MotherName).string().not_null())
                    .col(
                        ColumnDef::new(Students::ContactNumber)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::Address).string().null())
                    .col(
                        ColumnDef::new(Students::MonthlyFee)
                            .decimal_len(12, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Students::AdmissionDate).date().not_null())
                    .col(
                        ColumnDef::new(Students::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Students::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_user")
                            .from_tbl(Students::Table)
                            .from_col(Students::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::TeacherId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Teachers::EmployeeId)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Qualification).string().not_null())
                    .col(ColumnDef::new(Teachers::Subjects).custom("jsonb").not_null())
                    .col(ColumnDef::new(Teachers::Classes).custom("jsonb").not_null())
                    .col(
                        ColumnDef::new(Teachers::ExperienceYears)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Teachers::Salary)
                            .decimal_len(12, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Teachers::ContactNumber)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Teachers::JoiningDate).date().not_null())
                    .col(
                        ColumnDef::new(Teachers::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Teachers::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_user")
                            .from_tbl(Teachers::Table)
                            .from_col(Teachers::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AdminStaff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminStaff::StaffId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminStaff::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(AdminStaff::EmployeeId)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AdminStaff::Department).string().not_null())
                    .col(ColumnDef::new(AdminStaff::Designation).string().not_null())
                    .col(
                        ColumnDef::new(AdminStaff::Salary)
                            .decimal_len(12, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AdminStaff::ContactNumber)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminStaff::Responsibilities)
                            .custom("jsonb")
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminStaff::JoiningDate).date().not_null())
                    .col(
                        ColumnDef::new(AdminStaff::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(AdminStaff::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_staff_user")
                            .from_tbl(AdminStaff::Table)
                            .from_col(AdminStaff::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportStaff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupportStaff::StaffId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SupportStaff::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(SupportStaff::EmployeeId)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SupportStaff::StaffRole)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupportStaff::Salary)
                            .decimal_len(12, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SupportStaff::ContactNumber)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupportStaff::Duties)
                            .custom("jsonb")
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupportStaff::WorkingDays)
                            .custom("jsonb")
                            .not_null(),
                    )
                    .col(ColumnDef::new(SupportStaff::JoiningDate).date().not_null())
                    .col(
                        ColumnDef::new(SupportStaff::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(SupportStaff::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_staff_user")
                            .from_tbl(SupportStaff::Table)
                            .from_col(SupportStaff::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupportStaff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AdminStaff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
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

#[derive(DeriveIden)]
pub enum Teachers {
    Table,
    TeacherId,
    UserId,
    EmployeeId,
    Qualification,
    Subjects,
    Classes,
    ExperienceYears,
    Salary,
    ContactNumber,
    JoiningDate,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
pub enum AdminStaff {
    Table,
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

#[derive(DeriveIden)]
pub enum SupportStaff {
    Table,
    StaffId,
    UserId,
    EmployeeId,
    StaffRole,
    Salary,
    ContactNumber,
    Duties,
    WorkingDays,
    JoiningDate,
    CreateAt,
    UpdateAt,
}
