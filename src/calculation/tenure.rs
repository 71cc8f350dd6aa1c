//! Tenure calculation functionality.
//!
//! This module counts the whole months elapsed between an applicant's first
//! employment date and the evaluation date.

use chrono::{Datelike, NaiveDate};

use crate::models::AuditStep;

/// The result of a tenure calculation, including the month count and audit step.
#[derive(Debug, Clone)]
pub struct TenureResult {
    /// Whole months elapsed. Negative when the first employment date is in
    /// the future.
    pub months: i32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts the calendar months between two dates.
///
/// The count is `years * 12 + months`, borrowing a year when the month
/// difference is negative. Day-of-month is ignored, so 2025-01-31 to
/// 2025-02-01 counts as one month.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::months_between;
/// use chrono::NaiveDate;
///
/// let first = NaiveDate::from_ymd_opt(2023, 11, 20).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
/// assert_eq!(months_between(first, as_of), 15);
/// ```
pub fn months_between(first_employment_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut years = as_of.year() - first_employment_date.year();
    let mut months = as_of.month() as i32 - first_employment_date.month() as i32;

    if months < 0 {
        years -= 1;
        months += 12;
    }

    years * 12 + months
}

/// Calculates the applicant's tenure in whole months.
///
/// # Arguments
///
/// * `first_employment_date` - The date the applicant first started employment
/// * `as_of` - The date the decision is evaluated on
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_tenure(
    first_employment_date: NaiveDate,
    as_of: NaiveDate,
    step_number: u32,
) -> TenureResult {
    let months = months_between(first_employment_date, as_of);

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_months".to_string(),
        rule_name: "Tenure Months".to_string(),
        input: serde_json::json!({
            "first_employment_date": first_employment_date.to_string(),
            "as_of": as_of.to_string()
        }),
        output: serde_json::json!({
            "months": months
        }),
        reasoning: format!(
            "{} whole months elapsed between {} and {}",
            months, first_employment_date, as_of
        ),
    };

    TenureResult { months, audit_step }
}
