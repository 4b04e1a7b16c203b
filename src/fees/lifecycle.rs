//! Payment-status derivation and arrears math for fee records.
//!
//! Status is never set directly by callers: every write goes through
//! [`apply_update`], which recomputes the derived fields from the requested
//! change. The manual "mark paid" override is a distinct transition from the
//! amount-driven ones, so the precedence rule (an override beats the overdue
//! check) is an explicit branch.

use chrono::{Datelike, Months, NaiveDate};
use sea_orm::prelude::Decimal;

use crate::entities::fee;
use crate::entities::sea_orm_active_enums::FeeStatusEnum;

/// A change requested against a fee record.
pub enum FeeUpdate {
    /// The paid amount changed; status follows from the amounts.
    Payment { paid_amount: Decimal },
    /// Manual override: settle the record regardless of amounts.
    MarkPaid,
}

/// Fields recomputed from a [`FeeUpdate`], ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedState {
    pub status: FeeStatusEnum,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    pub payment_date: Option<NaiveDate>,
}

pub fn apply_update(
    amount: Decimal,
    current_payment_date: Option<NaiveDate>,
    update: FeeUpdate,
    due_date: NaiveDate,
    today: NaiveDate,
) -> DerivedState {
    let mut derived = match update {
        FeeUpdate::MarkPaid => DerivedState {
            status: FeeStatusEnum::Paid,
            paid_amount: amount,
            remaining_amount: Decimal::ZERO,
            payment_date: current_payment_date.or(Some(today)),
        },
        FeeUpdate::Payment { paid_amount } => {
            let status = if paid_amount <= Decimal::ZERO {
                FeeStatusEnum::Unpaid
            } else if paid_amount < amount {
                FeeStatusEnum::Partial
            } else {
                FeeStatusEnum::Paid
            };

            let payment_date = if status == FeeStatusEnum::Paid {
                current_payment_date.or(Some(today))
            } else {
                current_payment_date
            };

            DerivedState {
                status,
                paid_amount,
                remaining_amount: amount - paid_amount,
                payment_date,
            }
        }
    };

    // A record marked paid is never flipped to overdue.
    if derived.status != FeeStatusEnum::Paid && due_date < today {
        derived.status = FeeStatusEnum::Overdue;
    }

    derived
}

/// Carried-forward balance over fee records due strictly before
/// `month_start`: the remaining amount for partially paid records, the full
/// amount for unpaid or overdue ones.
pub fn arrears_total(fees: &[fee::Model], month_start: NaiveDate) -> Decimal {
    fees.iter()
        .filter(|f| f.due_date < month_start)
        .map(|f| match f.status {
            FeeStatusEnum::Partial => f.remaining_amount,
            FeeStatusEnum::Unpaid | FeeStatusEnum::Overdue => f.amount,
            FeeStatusEnum::Paid => Decimal::ZERO,
        })
        .sum()
}

/// Months starting at or before the configured fee-tracking start have no
/// history to carry, so arrears are suppressed there.
pub fn arrears_suppressed(month_start: NaiveDate, tracking_start: Option<NaiveDate>) -> bool {
    tracking_start.is_some_and(|start| month_start <= start)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is valid")
}

/// Last day of the month `date` falls in.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    (month_start(date) + Months::new(1))
        .pred_opt()
        .expect("day before first of month is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::sea_orm_active_enums::FeeTypeEnum;
    use chrono::Utc;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn fee_record(
        status: FeeStatusEnum,
        amount: i64,
        remaining: i64,
        due_date: NaiveDate,
    ) -> fee::Model {
        let now = Utc::now().naive_utc();
        fee::Model {
            fee_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            fee_type: FeeTypeEnum::Tuition,
            amount: dec(amount),
            paid_amount: dec(amount - remaining),
            remaining_amount: dec(remaining),
            arrears: Decimal::ZERO,
            status,
            due_date,
            payment_date: None,
            recorded_by: Uuid::new_v4(),
            remarks: None,
            create_at: now,
            update_at: now,
        }
    }

    #[test]
    fn full_payment_settles_record() {
        let today = date(2026, 3, 10);
        let derived = apply_update(
            dec(1000),
            None,
            FeeUpdate::Payment { paid_amount: dec(1000) },
            date(2026, 3, 31),
            today,
        );
        assert_eq!(derived.status, FeeStatusEnum::Paid);
        assert_eq!(derived.remaining_amount, Decimal::ZERO);
        assert_eq!(derived.payment_date, Some(today));
    }

    #[test]
    fn partial_payment_keeps_remainder() {
        let derived = apply_update(
            dec(1000),
            None,
            FeeUpdate::Payment { paid_amount: dec(400) },
            date(2026, 3, 31),
            date(2026, 3, 10),
        );
        assert_eq!(derived.status, FeeStatusEnum::Partial);
        assert_eq!(derived.remaining_amount, dec(600));
        assert_eq!(derived.payment_date, None);
    }

    #[test]
    fn unpaid_past_due_becomes_overdue() {
        let derived = apply_update(
            dec(1000),
            None,
            FeeUpdate::Payment { paid_amount: Decimal::ZERO },
            date(2026, 2, 28),
            date(2026, 3, 10),
        );
        assert_eq!(derived.status, FeeStatusEnum::Overdue);
        assert_eq!(derived.remaining_amount, dec(1000));
    }

    #[test]
    fn partial_past_due_becomes_overdue() {
        let derived = apply_update(
            dec(1000),
            None,
            FeeUpdate::Payment { paid_amount: dec(250) },
            date(2026, 2, 28),
            date(2026, 3, 10),
        );
        assert_eq!(derived.status, FeeStatusEnum::Overdue);
        assert_eq!(derived.remaining_amount, dec(750));
    }

    #[test]
    fn mark_paid_override_beats_overdue_check() {
        let today = date(2026, 3, 10);
        // Due date long past: the override still wins.
        let derived = apply_update(dec(1000), None, FeeUpdate::MarkPaid, date(2026, 1, 31), today);
        assert_eq!(derived.status, FeeStatusEnum::Paid);
        assert_eq!(derived.paid_amount, dec(1000));
        assert_eq!(derived.remaining_amount, Decimal::ZERO);
        assert_eq!(derived.payment_date, Some(today));
    }

    #[test]
    fn existing_payment_date_is_preserved() {
        let earlier = date(2026, 3, 1);
        let derived = apply_update(
            dec(1000),
            Some(earlier),
            FeeUpdate::MarkPaid,
            date(2026, 3, 31),
            date(2026, 3, 10),
        );
        assert_eq!(derived.payment_date, Some(earlier));
    }

    #[test]
    fn arrears_sums_remaining_for_partial_and_full_for_unpaid() {
        let cutoff = date(2026, 3, 1);
        let fees = vec![
            fee_record(FeeStatusEnum::Unpaid, 500, 500, date(2026, 1, 31)),
            fee_record(FeeStatusEnum::Partial, 1000, 200, date(2026, 2, 28)),
            // Inside the current month: excluded regardless of status.
            fee_record(FeeStatusEnum::Unpaid, 900, 900, date(2026, 3, 31)),
            // Settled history never counts.
            fee_record(FeeStatusEnum::Paid, 800, 0, date(2026, 1, 31)),
        ];
        assert_eq!(arrears_total(&fees, cutoff), dec(700));
    }

    #[test]
    fn arrears_counts_full_amount_for_overdue() {
        let cutoff = date(2026, 3, 1);
        let fees = vec![fee_record(FeeStatusEnum::Overdue, 300, 300, date(2026, 2, 28))];
        assert_eq!(arrears_total(&fees, cutoff), dec(300));
    }

    #[test]
    fn arrears_empty_history_is_zero() {
        assert_eq!(arrears_total(&[], date(2026, 3, 1)), Decimal::ZERO);
    }

    #[test]
    fn arrears_suppressed_at_or_before_tracking_start() {
        let start = Some(date(2026, 1, 1));
        assert!(arrears_suppressed(date(2026, 1, 1), start));
        assert!(arrears_suppressed(date(2025, 12, 1), start));
        assert!(!arrears_suppressed(date(2026, 2, 1), start));
        assert!(!arrears_suppressed(date(2026, 1, 1), None));
    }

    #[test]
    fn month_bounds() {
        assert_eq!(month_start(date(2026, 2, 17)), date(2026, 2, 1));
        assert_eq!(month_end(date(2026, 2, 17)), date(2026, 2, 28));
        assert_eq!(month_end(date(2024, 2, 5)), date(2024, 2, 29));
        assert_eq!(month_end(date(2026, 12, 31)), date(2026, 12, 31));
    }
}
