//! Amount lookup functionality.
//!
//! This module resolves a payroll category and tenure bucket to the minimum
//! and maximum allowable credit amounts from the fixed tables.

use crate::error::{EngineError, EngineResult};
use crate::models::{AmountRange, AuditStep, Gender, PayrollCategory, TenureBucket};
use crate::tables;

/// The result of an amount lookup, including the range and audit step.
#[derive(Debug, Clone)]
pub struct AmountLookupResult {
    /// The resolved minimum and maximum amounts.
    pub range: AmountRange,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Looks up the minimum and maximum amounts for a table cell.
///
/// # Arguments
///
/// * `category` - The applicant's payroll category
/// * `gender` - The applicant's gender, selecting the tables
/// * `bucket` - The normalized tenure bucket
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `AmountLookupResult`, or `AmountNotConfigured` if either table
/// has no column for the bucket. Normalized buckets always have one.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::lookup_amounts;
/// use credit_line_engine::models::{Gender, PayrollCategory, TenureBucket};
/// use rust_decimal::Decimal;
///
/// let result = lookup_amounts(PayrollCategory::B, Gender::Male, TenureBucket::new(26), 3)?;
/// assert_eq!(result.range.minimum, Decimal::new(1000, 0));
/// assert_eq!(result.range.maximum, Decimal::new(4700, 0));
/// # Ok::<(), credit_line_engine::error::EngineError>(())
/// ```
pub fn lookup_amounts(
    category: PayrollCategory,
    gender: Gender,
    bucket: TenureBucket,
    step_number: u32,
) -> EngineResult<AmountLookupResult> {
    let tables = tables::for_gender(gender);

    let not_configured = || EngineError::AmountNotConfigured {
        category: category.code().to_string(),
        gender: gender.code().to_string(),
        bucket: bucket.key(),
    };

    let minimum = tables
        .minimum
        .amount(category, bucket)
        .ok_or_else(not_configured)?;
    let maximum = tables
        .maximum
        .amount(category, bucket)
        .ok_or_else(not_configured)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "amount_lookup".to_string(),
        rule_name: "Amount Lookup".to_string(),
        input: serde_json::json!({
            "payroll_category": category.code(),
            "gender": gender.code(),
            "tenure_bucket": bucket.key()
        }),
        output: serde_json::json!({
            "minimum_amount": minimum.to_string(),
            "maximum_amount": maximum.to_string()
        }),
        reasoning: format!(
            "Category '{}' with tenure bucket {} ({}): minimum ${}, maximum ${}",
            category, bucket, gender, minimum, maximum
        ),
    };

    Ok(AmountLookupResult {
        range: AmountRange { minimum, maximum },
        audit_step,
    })
}
