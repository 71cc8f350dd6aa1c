//! Decision result models for the Credit Line Decision Engine.
//!
//! This module contains the [`DecisionResult`] type and its associated
//! structures that capture all outputs of a credit line decision, including
//! the resolved amount range, the optimal line and an audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TenureBucket;

/// The minimum and maximum allowable credit amounts for a table cell.
///
/// # Example
///
/// ```
/// use credit_line_engine::models::AmountRange;
/// use rust_decimal::Decimal;
///
/// let range = AmountRange {
///     minimum: Decimal::new(1000, 0),
///     maximum: Decimal::new(4700, 0),
/// };
/// assert_eq!(range.spread(), Decimal::new(3700, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRange {
    /// The minimum allowable amount.
    pub minimum: Decimal,
    /// The maximum allowable amount.
    pub maximum: Decimal,
}

impl AmountRange {
    /// Returns `maximum - minimum`.
    pub fn spread(&self) -> Decimal {
        self.maximum - self.minimum
    }
}

/// A single step in the audit trace recording a decision rule.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during a decision.
///
/// Warnings flag inputs that were accepted but look suspicious.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of decision steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the decision.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a credit line decision.
///
/// `optimal_line` is exact; [`DecisionResult::rounded_line`] gives the whole
/// currency amount shown to applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// The minimum allowable credit amount.
    pub minimum_amount: Decimal,
    /// The maximum allowable credit amount.
    pub maximum_amount: Decimal,
    /// The recommended credit line.
    pub optimal_line: Decimal,
    /// The normalized tenure bucket used for the table lookup.
    pub tenure_bucket: TenureBucket,
    /// The elapsed whole months before normalization.
    pub tenure_months: i32,
    /// Audit trace of the rules applied.
    pub audit_trace: AuditTrace,
}

impl DecisionResult {
    /// Returns the optimal line rounded up to a whole currency unit.
    ///
    /// # Example
    ///
    /// ```
    /// use credit_line_engine::models::{AuditTrace, DecisionResult, TenureBucket};
    /// use rust_decimal::Decimal;
    ///
    /// let result = DecisionResult {
    ///     minimum_amount: Decimal::new(1000, 0),
    ///     maximum_amount: Decimal::new(4700, 0),
    ///     optimal_line: Decimal::new(106475, 2),
    ///     tenure_bucket: TenureBucket::new(26),
    ///     tenure_months: 18,
    ///     audit_trace: AuditTrace::default(),
    /// };
    /// assert_eq!(result.rounded_line(), Decimal::new(1065, 0));
    /// ```
    pub fn rounded_line(&self) -> Decimal {
        self.optimal_line.ceil()
    }
}
