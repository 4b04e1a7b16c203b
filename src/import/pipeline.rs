//! The bulk import pipeline: parsed rows in, accounts + profiles out, with
//! per-row failures isolated and an audit record persisted per run.
//!
//! Rows are processed sequentially within one request. Account and profile
//! are created inside a single transaction, so a profile failure rolls the
//! account back instead of leaving an orphan. Natural-key races between
//! concurrent uploads fall through to the database unique constraints and
//! surface as row errors.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use sea_orm::TransactionTrait;
use sea_orm::prelude::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{APP_CONFIG, TEMP_PASSWORD_LENGTH};
use crate::entities::sea_orm_active_enums::ImportStatusEnum;
use crate::import::parser::{self, ImportRow};
use crate::import::roles::{self, EmailPolicy, ImportKind};
use crate::repositories::{
    FeeRepository, ImportHistoryRepository, StaffRepository, StudentRepository, TeacherRepository,
    UserRepository,
};
use crate::utils::random::generate_random_string;

/// One failed row. `row` is the 1-indexed position in the uploaded sheet,
/// counting the header row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// Aggregate result of one import run.
/// Invariant: `success_count + error_count == total_records`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImportOutcome {
    pub total_records: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<RowError>,
}

impl ImportOutcome {
    pub fn status(&self) -> ImportStatusEnum {
        if self.error_count == 0 {
            ImportStatusEnum::Success
        } else if self.success_count == 0 {
            ImportStatusEnum::Failed
        } else {
            ImportStatusEnum::Partial
        }
    }
}

/// Runs one import end to end: parse, process every row, persist the audit
/// record. Parse failures abort before any row is touched; row failures are
/// collected and never abort the batch. The caller owns temp-file cleanup.
pub async fn run_import(
    kind: ImportKind,
    file_path: &Path,
    stored_name: &str,
    original_name: &str,
    uploaded_by: Uuid,
) -> Result<ImportOutcome> {
    let rows = parser::parse_rows(file_path)?;

    // Sequence basis for generated teacher employee ids, taken once per run.
    let mut teacher_sequence = match kind {
        ImportKind::Teacher => TeacherRepository::new().count().await? + 1,
        _ => 1,
    };

    let total_records = rows.len();
    let mut success_count = 0usize;
    let mut errors: Vec<RowError> = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match process_row(kind, row, uploaded_by, &mut teacher_sequence).await {
            Ok(()) => success_count += 1,
            Err(e) => errors.push(RowError {
                // 1-indexed, plus the header row.
                row: index + 2,
                message: format!("{:#}", e),
            }),
        }
    }

    let outcome = ImportOutcome {
        total_records,
        success_count,
        error_count: errors.len(),
        errors,
    };

    ImportHistoryRepository::new()
        .create(
            kind.role(),
            stored_name.to_string(),
            original_name.to_string(),
            uploaded_by,
            outcome.status(),
            outcome.total_records as i32,
            outcome.success_count as i32,
            outcome.error_count as i32,
            serde_json::to_value(&outcome.errors).unwrap_or_else(|_| serde_json::json!([])),
        )
        .await
        .context("Failed to record import history")?;

    Ok(outcome)
}

async fn process_row(
    kind: ImportKind,
    row: &ImportRow,
    uploaded_by: Uuid,
    teacher_sequence: &mut u64,
) -> Result<()> {
    let missing: Vec<&str> = kind
        .required_fields()
        .iter()
        .copied()
        .filter(|field| row.get(field).is_none())
        .collect();
    if !missing.is_empty() {
        bail!("Missing required fields: {}", missing.join(", "));
    }

    let first_name = row.value("firstName");
    let last_name = row.value("lastName");

    let user_repo = UserRepository::new();
    let email = resolve_email(kind, row, &first_name, &last_name).await?;

    let temp_password = generate_random_string(TEMP_PASSWORD_LENGTH);
    let hashed_password = bcrypt::hash(&temp_password, bcrypt::DEFAULT_COST)
        .context("Failed to hash temporary password")?;

    let db = user_repo.get_connection();
    let user_id = Uuid::new_v4();
    let today = Utc::now().date_naive();

    match kind {
        ImportKind::Student => {
            let roll_number = row.value("rollNumber");
            if StudentRepository::new()
                .roll_number_exists(&roll_number)
                .await?
            {
                bail!("Roll number {} already exists", roll_number);
            }

            let monthly_fee = row.decimal_or_zero("monthlyFee");

            let txn = db.begin().await?;
            user_repo
                .create_in(
                    &txn,
                    user_id,
                    first_name,
                    last_name,
                    email,
                    hashed_password,
                    kind.role(),
                    Some(uploaded_by),
                )
                .await?;
            let profile = StudentRepository::new()
                .create_in(
                    &txn,
                    user_id,
                    roll_number,
                    row.value("class"),
                    row.value("section"),
                    row.value("gender"),
                    row.value("fatherName"),
                    row.value("motherName"),
                    row.value("contactNumber"),
                    row.get("address").map(str::to_string),
                    monthly_fee,
                    today,
                )
                .await?;
            txn.commit().await?;

            // Fee seeding is a post-success side effect: a failure here is
            // logged, the row stays successful.
            if monthly_fee > Decimal::ZERO {
                if let Err(e) = FeeRepository::new()
                    .create_initial_fee_record(profile.student_id, uploaded_by, monthly_fee)
                    .await
                {
                    tracing::warn!(
                        "Failed to seed initial fee record for student {}: {:#}",
                        profile.student_id,
                        e
                    );
                }
            }
        }
        ImportKind::Teacher => {
            let employee_id = next_teacher_employee_id(teacher_sequence).await?;

            let txn = db.begin().await?;
            user_repo
                .create_in(
                    &txn,
                    user_id,
                    first_name,
                    last_name,
                    email,
                    hashed_password,
                    kind.role(),
                    Some(uploaded_by),
                )
                .await?;
            TeacherRepository::new()
                .create_in(
                    &txn,
                    user_id,
                    employee_id,
                    row.value("qualification"),
                    row.list("subjects"),
                    row.list("classes"),
                    row.int_or_zero("experience"),
                    row.decimal_or_zero("salary"),
                    row.value("contactNumber"),
                    today,
                )
                .await?;
            txn.commit().await?;
        }
        ImportKind::AdminStaff => {
            let employee_id = row.value("employeeId");
            if StaffRepository::new()
                .admin_employee_id_exists(&employee_id)
                .await?
            {
                bail!("Employee ID {} already exists", employee_id);
            }

            let txn = db.begin().await?;
            user_repo
                .create_in(
                    &txn,
                    user_id,
                    first_name,
                    last_name,
                    email,
                    hashed_password,
                    kind.role(),
                    Some(uploaded_by),
                )
                .await?;
            StaffRepository::new()
                .create_admin_in(
                    &txn,
                    user_id,
                    employee_id,
                    row.value("department"),
                    row.value("designation"),
                    row.decimal_or_zero("salary"),
                    row.value("contactNumber"),
                    row.list("responsibilities"),
                    today,
                )
                .await?;
            txn.commit().await?;
        }
        ImportKind::SupportStaff => {
            let employee_id = row.value("employeeId");
            if StaffRepository::new()
                .support_employee_id_exists(&employee_id)
                .await?
            {
                bail!("Employee ID {} already exists", employee_id);
            }

            let txn = db.begin().await?;
            user_repo
                .create_in(
                    &txn,
                    user_id,
                    first_name,
                    last_name,
                    email,
                    hashed_password,
                    kind.role(),
                    Some(uploaded_by),
                )
                .await?;
            StaffRepository::new()
                .create_support_in(
                    &txn,
                    user_id,
                    employee_id,
                    row.value("staffRole"),
                    row.decimal_or_zero("salary"),
                    row.value("contactNumber"),
                    row.list("responsibilities"),
                    row.list("daysOfWeek"),
                    today,
                )
                .await?;
            txn.commit().await?;
        }
    }

    Ok(())
}

async fn resolve_email(
    kind: ImportKind,
    row: &ImportRow,
    first_name: &str,
    last_name: &str,
) -> Result<String> {
    let user_repo = UserRepository::new();

    match kind.email_policy() {
        EmailPolicy::Required => {
            // Presence is covered by the required-field check.
            let email = row.value("email");
            if !roles::is_valid_email(&email) {
                bail!("Invalid email address: {}", email);
            }
            if user_repo.email_exists(&email).await? {
                bail!("Email {} already exists", email);
            }
            Ok(email)
        }
        EmailPolicy::Generated { prefix } => {
            generate_unique_email(&user_repo, prefix, first_name, last_name).await
        }
    }
}

/// Synthetic address from the cleaned name; bumps a numeric suffix on the
/// local part until the address is free.
async fn generate_unique_email(
    user_repo: &UserRepository,
    prefix: &str,
    first_name: &str,
    last_name: &str,
) -> Result<String> {
    let domain = &APP_CONFIG.email_domain;
    let base = roles::synthetic_email(prefix, first_name, last_name, domain);
    if !user_repo.email_exists(&base).await? {
        return Ok(base);
    }

    let mut suffix = 1u32;
    loop {
        let candidate =
            roles::synthetic_email_with_suffix(prefix, first_name, last_name, suffix, domain);
        if !user_repo.email_exists(&candidate).await? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}

/// Next free generated teacher employee id. The sequence starts at the
/// profile count taken when the run began and is re-checked against the
/// store, so collisions left by earlier runs are skipped instead of failing
/// the row.
async fn next_teacher_employee_id(sequence: &mut u64) -> Result<String> {
    let teacher_repo = TeacherRepository::new();
    let year = roles::current_year();

    loop {
        let candidate = roles::teacher_employee_id(year, *sequence);
        *sequence += 1;
        if !teacher_repo.employee_id_exists(&candidate).await? {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(success: usize, errors: usize) -> ImportOutcome {
        ImportOutcome {
            total_records: success + errors,
            success_count: success,
            error_count: errors,
            errors: (0..errors)
                .map(|i| RowError {
                    row: i + 2,
                    message: "bad row".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn status_is_success_without_errors() {
        assert_eq!(outcome(5, 0).status(), ImportStatusEnum::Success);
    }

    #[test]
    fn status_is_failed_without_successes() {
        assert_eq!(outcome(0, 3).status(), ImportStatusEnum::Failed);
    }

    #[test]
    fn status_is_partial_otherwise() {
        assert_eq!(outcome(9, 1).status(), ImportStatusEnum::Partial);
    }

    #[test]
    fn counts_reconcile() {
        let o = outcome(9, 1);
        assert_eq!(o.success_count + o.error_count, o.total_records);
        assert_eq!(o.errors.first().map(|e| e.row), Some(2));
    }
}
