//! Decision orchestration.
//!
//! [`evaluate`] is the textual entry point: it parses the categorical inputs
//! and hands a typed [`DecisionInput`] to [`evaluate_input`], which runs the
//! decision rules in order and assembles the [`DecisionResult`].

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{
    calculate_optimal_line, calculate_tenure, lookup_amounts, normalize_tenure,
};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DecisionInput, DecisionResult, Gender, PayrollCategory,
};

/// Evaluates a credit line decision from textual inputs.
///
/// Gender is validated before the payroll category, so an input with both
/// invalid reports `InvalidGender`.
///
/// # Arguments
///
/// * `payroll_category` - One of `"A"`, `"B"`, `"C"`, `"D"` (case-sensitive)
/// * `gender` - `"m"` or `"f"`
/// * `first_employment_date` - The date the applicant first started employment
/// * `as_of` - The caller's current date
///
/// # Examples
///
/// ```
/// use credit_line_engine::engine::evaluate;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = evaluate(
///     "D",
///     "m",
///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
/// )?;
/// assert_eq!(result.tenure_bucket.key(), 30);
/// assert_eq!(result.rounded_line(), Decimal::new(1058, 0));
/// # Ok::<(), credit_line_engine::error::EngineError>(())
/// ```
pub fn evaluate(
    payroll_category: &str,
    gender: &str,
    first_employment_date: NaiveDate,
    as_of: NaiveDate,
) -> EngineResult<DecisionResult> {
    let gender = gender.parse::<Gender>().inspect_err(|err| {
        debug!(error = %err, "Rejected decision input");
    })?;
    let payroll_category = payroll_category.parse::<PayrollCategory>().inspect_err(|err| {
        debug!(error = %err, "Rejected decision input");
    })?;

    evaluate_input(&DecisionInput {
        payroll_category,
        gender,
        first_employment_date,
        as_of,
    })
}

/// Evaluates a credit line decision from validated inputs.
pub fn evaluate_input(input: &DecisionInput) -> EngineResult<DecisionResult> {
    let mut steps: Vec<AuditStep> = Vec::with_capacity(4);
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let tenure = calculate_tenure(input.first_employment_date, input.as_of, 1);
    debug!(months = tenure.months, "Calculated tenure");
    if tenure.months < 0 {
        warnings.push(AuditWarning {
            code: "FUTURE_EMPLOYMENT_DATE".to_string(),
            message: format!(
                "First employment date {} is after {}; tenure treated as the lowest bucket",
                input.first_employment_date, input.as_of
            ),
        });
    }
    steps.push(tenure.audit_step);

    let normalized = normalize_tenure(tenure.months, input.gender, 2);
    debug!(bucket = normalized.bucket.key(), "Normalized tenure");
    steps.push(normalized.audit_step);

    let lookup = lookup_amounts(input.payroll_category, input.gender, normalized.bucket, 3)?;
    debug!(
        minimum = %lookup.range.minimum,
        maximum = %lookup.range.maximum,
        "Resolved amount range"
    );
    steps.push(lookup.audit_step);

    let line = calculate_optimal_line(&lookup.range, 4)?;
    debug!(optimal_line = %line.optimal_line, "Calculated optimal line");
    steps.push(line.audit_step);

    Ok(DecisionResult {
        minimum_amount: lookup.range.minimum,
        maximum_amount: lookup.range.maximum,
        optimal_line: line.optimal_line,
        tenure_bucket: normalized.bucket,
        tenure_months: tenure.months,
        audit_trace: AuditTrace { steps, warnings },
    })
}
