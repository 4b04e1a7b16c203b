use anyhow::Result;
use chrono::Utc;
use sea_orm::prelude::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::config::APP_CONFIG;
use crate::entities::sea_orm_active_enums::{FeeStatusEnum, FeeTypeEnum};
use crate::entities::{fee, student, user};
use crate::fees::lifecycle::{self, FeeUpdate};
use crate::static_service::DATABASE_CONNECTION;

pub struct FeeRepository;

impl FeeRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, fee_id: Uuid) -> Result<Option<fee::Model>> {
        let db = self.get_connection();
        let record = fee::Entity::find_by_id(fee_id).one(db).await?;
        Ok(record)
    }

    pub async fn find_by_student(&self, student_id: Uuid) -> Result<Vec<fee::Model>> {
        let db = self.get_connection();
        let records = fee::Entity::find()
            .filter(fee::Column::StudentId.eq(student_id))
            .order_by_desc(fee::Column::DueDate)
            .all(db)
            .await?;
        Ok(records)
    }

    /// Records that can still carry a balance into the month starting at
    /// `month_start`.
    async fn find_carryable_before(
        &self,
        student_id: Uuid,
        month_start: chrono::NaiveDate,
    ) -> Result<Vec<fee::Model>> {
        let db = self.get_connection();
        let records = fee::Entity::find()
            .filter(fee::Column::StudentId.eq(student_id))
            .filter(fee::Column::DueDate.lt(month_start))
            .filter(fee::Column::Status.is_in([
                FeeStatusEnum::Unpaid,
                FeeStatusEnum::Partial,
                FeeStatusEnum::Overdue,
            ]))
            .all(db)
            .await?;
        Ok(records)
    }

    /// Unpaid balance carried forward from months before the current one.
    pub async fn calculate_arrears(&self, student_id: Uuid) -> Result<Decimal> {
        let today = Utc::now().date_naive();
        let month_start = lifecycle::month_start(today);

        if lifecycle::arrears_suppressed(month_start, APP_CONFIG.fee_tracking_start) {
            return Ok(Decimal::ZERO);
        }

        let history = self.find_carryable_before(student_id, month_start).await?;
        Ok(lifecycle::arrears_total(&history, month_start))
    }

    /// Seeds (or refreshes) the tuition fee record for the current month.
    /// Keyed on student + tuition + due month, so calling it twice in the
    /// same month updates the existing record instead of duplicating it.
    /// Returns `None` when the student or the recorder does not exist.
    pub async fn create_initial_fee_record(
        &self,
        student_id: Uuid,
        recorded_by: Uuid,
        monthly_fee: Decimal,
    ) -> Result<Option<fee::Model>> {
        let db = self.get_connection();

        if student::Entity::find_by_id(student_id).one(db).await?.is_none() {
            return Ok(None);
        }
        if user::Entity::find_by_id(recorded_by).one(db).await?.is_none() {
            return Ok(None);
        }

        let today = Utc::now().date_naive();
        let window_start = lifecycle::month_start(today);
        let due_date = lifecycle::month_end(today);
        let arrears = self.calculate_arrears(student_id).await?;
        let now = Utc::now().naive_utc();

        let existing = fee::Entity::find()
            .filter(fee::Column::StudentId.eq(student_id))
            .filter(fee::Column::FeeType.eq(FeeTypeEnum::Tuition))
            .filter(fee::Column::DueDate.gte(window_start))
            .filter(fee::Column::DueDate.lte(due_date))
            .one(db)
            .await?;

        let record = if let Some(existing) = existing {
            let paid = existing.paid_amount;
            let mut active: fee::ActiveModel = existing.into();
            active.amount = Set(monthly_fee);
            active.remaining_amount = Set(monthly_fee - paid);
            active.arrears = Set(arrears);
            active.due_date = Set(due_date);
            active.recorded_by = Set(recorded_by);
            active.update_at = Set(now);
            active.update(db).await?
        } else {
            fee::ActiveModel {
                fee_id: Set(Uuid::new_v4()),
                student_id: Set(student_id),
                fee_type: Set(FeeTypeEnum::Tuition),
                amount: Set(monthly_fee),
                paid_amount: Set(Decimal::ZERO),
                remaining_amount: Set(monthly_fee),
                arrears: Set(arrears),
                status: Set(FeeStatusEnum::Unpaid),
                due_date: Set(due_date),
                payment_date: Set(None),
                recorded_by: Set(recorded_by),
                remarks: Set(None),
                create_at: Set(now),
                update_at: Set(now),
            }
            .insert(db)
            .await?
        };

        Ok(Some(record))
    }

    /// Admin records a one-off fee; the arrears snapshot is taken at
    /// creation time and the status runs through the usual derivation.
    pub async fn create_manual(
        &self,
        student_id: Uuid,
        fee_type: FeeTypeEnum,
        amount: Decimal,
        due_date: chrono::NaiveDate,
        recorded_by: Uuid,
        remarks: Option<String>,
    ) -> Result<fee::Model> {
        let db = self.get_connection();
        let today = Utc::now().date_naive();
        let arrears = self.calculate_arrears(student_id).await?;
        let derived = lifecycle::apply_update(
            amount,
            None,
            FeeUpdate::Payment {
                paid_amount: Decimal::ZERO,
            },
            due_date,
            today,
        );
        let now = Utc::now().naive_utc();

        let record = fee::ActiveModel {
            fee_id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            fee_type: Set(fee_type),
            amount: Set(amount),
            paid_amount: Set(derived.paid_amount),
            remaining_amount: Set(derived.remaining_amount),
            arrears: Set(arrears),
            status: Set(derived.status),
            due_date: Set(due_date),
            payment_date: Set(derived.payment_date),
            recorded_by: Set(recorded_by),
            remarks: Set(remarks),
            create_at: Set(now),
            update_at: Set(now),
        }
        .insert(db)
        .await?;

        Ok(record)
    }

    pub async fn record_payment(
        &self,
        fee_id: Uuid,
        paid_amount: Decimal,
        recorded_by: Uuid,
    ) -> Result<Option<fee::Model>> {
        let db = self.get_connection();
        let Some(existing) = fee::Entity::find_by_id(fee_id).one(db).await? else {
            return Ok(None);
        };

        let today = Utc::now().date_naive();
        let derived = lifecycle::apply_update(
            existing.amount,
            existing.payment_date,
            FeeUpdate::Payment { paid_amount },
            existing.due_date,
            today,
        );

        let mut active: fee::ActiveModel = existing.into();
        active.paid_amount = Set(derived.paid_amount);
        active.remaining_amount = Set(derived.remaining_amount);
        active.status = Set(derived.status);
        active.payment_date = Set(derived.payment_date);
        active.recorded_by = Set(recorded_by);
        active.update_at = Set(Utc::now().naive_utc());

        let record = active.update(db).await?;
        Ok(Some(record))
    }

    /// Explicit status override. Setting paid runs the manual-override
    /// transition; any other status is applied as-is and then re-checked
    /// against the due date.
    pub async fn override_status(
        &self,
        fee_id: Uuid,
        status: FeeStatusEnum,
        recorded_by: Uuid,
    ) -> Result<Option<fee::Model>> {
        let db = self.get_connection();
        let Some(existing) = fee::Entity::find_by_id(fee_id).one(db).await? else {
            return Ok(None);
        };

        let today = Utc::now().date_naive();
        let mut active: fee::ActiveModel = existing.clone().into();

        if status == FeeStatusEnum::Paid {
            let derived = lifecycle::apply_update(
                existing.amount,
                existing.payment_date,
                FeeUpdate::MarkPaid,
                existing.due_date,
                today,
            );
            active.paid_amount = Set(derived.paid_amount);
            active.remaining_amount = Set(derived.remaining_amount);
            active.status = Set(derived.status);
            active.payment_date = Set(derived.payment_date);
        } else {
            let mut next = status;
            if next != FeeStatusEnum::Overdue && existing.due_date < today {
                next = FeeStatusEnum::Overdue;
            }
            active.status = Set(next);
        }

        active.recorded_by = Set(recorded_by);
        active.update_at = Set(Utc::now().naive_utc());

        let record = active.update(db).await?;
        Ok(Some(record))
    }

    pub async fn delete(&self, fee_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = fee::Entity::delete_by_id(fee_id).exec(db).await?;
        Ok(result)
    }

    /// Removes fee records whose student row is gone or whose account is
    /// inactive or soft-deleted. Administrative cleanup, not routine.
    pub async fn delete_orphaned(&self) -> Result<u64> {
        let db = self.get_connection();
        let records = fee::Entity::find()
            .find_also_related(student::Entity)
            .all(db)
            .await?;

        let mut removed = 0u64;
        for (fee_record, student_record) in records {
            let orphaned = match student_record {
                None => true,
                Some(s) => match user::Entity::find_by_id(s.user_id).one(db).await? {
                    None => true,
                    Some(account) => !account.is_active || account.deleted_at.is_some(),
                },
            };

            if orphaned {
                fee::Entity::delete_by_id(fee_record.fee_id).exec(db).await?;
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// (collected, outstanding) across fee records due in the current month.
    pub async fn monthly_totals(&self) -> Result<(Decimal, Decimal)> {
        let db = self.get_connection();
        let today = Utc::now().date_naive();
        let records = fee::Entity::find()
            .filter(fee::Column::DueDate.gte(lifecycle::month_start(today)))
            .filter(fee::Column::DueDate.lte(lifecycle::month_end(today)))
            .all(db)
            .await?;

        let mut collected = Decimal::ZERO;
        let mut outstanding = Decimal::ZERO;
        for record in records {
            collected += record.paid_amount;
            if record.status != FeeStatusEnum::Paid {
                outstanding += record.remaining_amount;
            }
        }

        Ok((collected, outstanding))
    }
}
