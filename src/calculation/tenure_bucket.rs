//! Tenure normalization functionality.
//!
//! This module maps a raw month count onto the tenure buckets the amount
//! tables are keyed by. Bucket boundaries differ by gender.

use crate::models::{AuditStep, Gender, TenureBucket};

/// Lowest tenure bucket for male applicants.
pub const MALE_TENURE_FLOOR: u32 = 26;
/// Highest tenure bucket for male applicants.
pub const MALE_TENURE_CEILING: u32 = 30;
/// Lowest tenure bucket for female applicants.
pub const FEMALE_TENURE_FLOOR: u32 = 24;
/// Highest tenure bucket for female applicants.
pub const FEMALE_TENURE_CEILING: u32 = 28;

/// The result of tenure normalization, including the bucket and audit step.
#[derive(Debug, Clone)]
pub struct NormalizedTenureResult {
    /// The normalized tenure bucket.
    pub bucket: TenureBucket,
    /// The audit step recording this normalization.
    pub audit_step: AuditStep,
}

/// Returns the `(floor, ceiling)` bucket bounds for a gender.
pub fn tenure_bounds(gender: Gender) -> (u32, u32) {
    match gender {
        Gender::Male => (MALE_TENURE_FLOOR, MALE_TENURE_CEILING),
        Gender::Female => (FEMALE_TENURE_FLOOR, FEMALE_TENURE_CEILING),
    }
}

/// Maps a raw month count to its tenure bucket.
///
/// Counts at or below the floor map to the floor, counts at or above the
/// ceiling map to the ceiling, and anything in between is its own bucket.
/// Negative counts map to the floor.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::bucket_for;
/// use credit_line_engine::models::{Gender, TenureBucket};
///
/// assert_eq!(bucket_for(10, Gender::Male), TenureBucket::new(26));
/// assert_eq!(bucket_for(27, Gender::Male), TenureBucket::new(27));
/// assert_eq!(bucket_for(50, Gender::Female), TenureBucket::new(28));
/// ```
pub fn bucket_for(months: i32, gender: Gender) -> TenureBucket {
    let (floor, ceiling) = tenure_bounds(gender);
    let clamped = i64::from(months).clamp(i64::from(floor), i64::from(ceiling));
    // Clamped into [floor, ceiling], so the conversion is lossless.
    TenureBucket::new(clamped as u32)
}

/// Normalizes a raw month count into the gender's tenure bucket.
///
/// # Arguments
///
/// * `months` - Whole months of tenure, possibly negative
/// * `gender` - The applicant's gender
/// * `step_number` - The step number for audit trail sequencing
pub fn normalize_tenure(months: i32, gender: Gender, step_number: u32) -> NormalizedTenureResult {
    let bucket = bucket_for(months, gender);
    let (floor, ceiling) = tenure_bounds(gender);

    let reasoning = if months <= floor as i32 {
        format!(
            "{} months is at or below the floor of {}, using bucket {}",
            months, floor, bucket
        )
    } else if months >= ceiling as i32 {
        format!(
            "{} months is at or above the ceiling of {}, using bucket {}",
            months, ceiling, bucket
        )
    } else {
        format!("{} months is within range, using bucket {}", months, bucket)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_normalization".to_string(),
        rule_name: "Tenure Normalization".to_string(),
        input: serde_json::json!({
            "months": months,
            "gender": gender.code()
        }),
        output: serde_json::json!({
            "bucket": bucket.key(),
            "floor": floor,
            "ceiling": ceiling
        }),
        reasoning,
    };

    NormalizedTenureResult { bucket, audit_step }
}
