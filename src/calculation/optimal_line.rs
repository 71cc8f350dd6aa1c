//! Optimal line calculation functionality.
//!
//! The optimal line blends two candidates over the spread between the
//! minimum and maximum amounts: a square-root term that dominates small
//! spreads and a shallow linear term that dominates large ones.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{EngineError, EngineResult};
use crate::models::{AmountRange, AuditStep};

/// Returns the rate of the linear candidate, 1.75% of the spread.
pub fn linear_spread_rate() -> Decimal {
    Decimal::new(175, 4)
}

/// The result of an optimal line calculation, including both candidates.
#[derive(Debug, Clone)]
pub struct OptimalLineResult {
    /// The recommended credit line, `max(sqrt_candidate, linear_candidate)`.
    pub optimal_line: Decimal,
    /// `minimum + sqrt(maximum - minimum)`.
    pub sqrt_candidate: Decimal,
    /// `minimum + 0.0175 * (maximum - minimum)`.
    pub linear_candidate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns both candidates for a range, or `InvalidRange` if the minimum
/// exceeds the maximum.
fn candidates(range: &AmountRange) -> EngineResult<(Decimal, Decimal)> {
    let invalid = || EngineError::InvalidRange {
        minimum: range.minimum,
        maximum: range.maximum,
    };

    if range.minimum > range.maximum {
        return Err(invalid());
    }

    let spread = range.spread();
    let root = spread.sqrt().ok_or_else(invalid)?;

    Ok((
        range.minimum + root,
        range.minimum + linear_spread_rate() * spread,
    ))
}

/// Computes the optimal credit line for a minimum and maximum amount.
///
/// The result is never below `minimum` and equals it when the spread is zero.
/// It is not rounded.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::optimal_line;
/// use rust_decimal::Decimal;
///
/// let line = optimal_line(Decimal::new(1000, 0), Decimal::new(4700, 0))?;
/// assert_eq!(line, Decimal::new(106475, 2));
/// # Ok::<(), credit_line_engine::error::EngineError>(())
/// ```
pub fn optimal_line(minimum: Decimal, maximum: Decimal) -> EngineResult<Decimal> {
    let (sqrt_candidate, linear_candidate) = candidates(&AmountRange { minimum, maximum })?;
    Ok(sqrt_candidate.max(linear_candidate).normalize())
}

/// Calculates the optimal line for a resolved amount range.
///
/// # Arguments
///
/// * `range` - The minimum and maximum amounts
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_optimal_line(
    range: &AmountRange,
    step_number: u32,
) -> EngineResult<OptimalLineResult> {
    let (sqrt_candidate, linear_candidate) = candidates(range)?;
    // Drop the trailing zeros left by the rate multiplication.
    let optimal_line = sqrt_candidate.max(linear_candidate).normalize();

    let chosen = if sqrt_candidate >= linear_candidate {
        "square-root"
    } else {
        "linear"
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "optimal_line".to_string(),
        rule_name: "Optimal Line".to_string(),
        input: serde_json::json!({
            "minimum_amount": range.minimum.to_string(),
            "maximum_amount": range.maximum.to_string()
        }),
        output: serde_json::json!({
            "sqrt_candidate": sqrt_candidate.normalize().to_string(),
            "linear_candidate": linear_candidate.normalize().to_string(),
            "optimal_line": optimal_line.to_string()
        }),
        reasoning: format!(
            "max(${} + sqrt({}), ${} + {} x {}) = ${} ({} candidate)",
            range.minimum,
            range.spread(),
            range.minimum,
            linear_spread_rate(),
            range.spread(),
            optimal_line.round_dp(2),
            chosen
        ),
    };

    Ok(OptimalLineResult {
        optimal_line,
        sqrt_candidate,
        linear_candidate,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_linear_spread_rate_is_exactly_0_0175() {
        assert_eq!(linear_spread_rate(), dec("0.0175"));
    }

    #[test]
    fn test_linear_candidate_wins_for_wide_spread() {
        // sqrt: 1000 + sqrt(3700) ~ 1060.83, linear: 1000 + 64.75 = 1064.75
        let result = optimal_line(dec("1000"), dec("4700")).unwrap();
        assert_eq!(result, dec("1064.75"));
        assert_eq!(result.ceil(), dec("1065"));
    }

    #[test]
    fn test_sqrt_candidate_wins_for_narrower_spread() {
        // sqrt: 800 + sqrt(3200) ~ 856.5685, linear: 800 + 56 = 856
        let result = optimal_line(dec("800"), dec("4000")).unwrap();
        assert!(result > dec("856.56") && result < dec("856.57"));
        assert_eq!(result.ceil(), dec("857"));
    }

    #[test]
    fn test_clamped_male_category_d() {
        // sqrt: 1000 + sqrt(3300) ~ 1057.45, linear: 1000 + 57.75 = 1057.75
        let result = optimal_line(dec("1000"), dec("4300")).unwrap();
        assert_eq!(result, dec("1057.75"));
        assert_eq!(result.ceil(), dec("1058"));
    }

    #[test]
    fn test_zero_spread_collapses_to_minimum() {
        assert_eq!(optimal_line(dec("750"), dec("750")).unwrap(), dec("750"));
        assert_eq!(optimal_line(dec("0"), dec("0")).unwrap(), dec("0"));
    }

    #[test]
    fn test_minimum_above_maximum_is_invalid_range() {
        match optimal_line(dec("5000"), dec("100")).unwrap_err() {
            EngineError::InvalidRange { minimum, maximum } => {
                assert_eq!(minimum, dec("5000"));
                assert_eq!(maximum, dec("100"));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_optimal_line_records_candidates() {
        let range = AmountRange {
            minimum: dec("1000"),
            maximum: dec("4700"),
        };
        let result = calculate_optimal_line(&range, 4).unwrap();

        assert_eq!(result.optimal_line, dec("1064.75"));
        assert_eq!(result.linear_candidate, dec("1064.75"));
        assert!(result.sqrt_candidate < result.linear_candidate);
        assert_eq!(result.audit_step.rule_id, "optimal_line");
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(
            result.audit_step.output["optimal_line"].as_str().unwrap(),
            "1064.75"
        );
        assert!(result.audit_step.reasoning.contains("linear candidate"));
    }

    #[test]
    fn test_optimal_line_has_no_trailing_zeros() {
        let range = AmountRange {
            minimum: dec("1000"),
            maximum: dec("4300"),
        };
        let result = calculate_optimal_line(&range, 4).unwrap();

        assert_eq!(result.optimal_line.to_string(), "1057.75");
        assert_eq!(
            optimal_line(dec("1000"), dec("4700")).unwrap().to_string(),
            "1064.75"
        );
    }

    #[test]
    fn test_calculate_optimal_line_rejects_inverted_range() {
        let range = AmountRange {
            minimum: dec("4700"),
            maximum: dec("1000"),
        };
        assert!(matches!(
            calculate_optimal_line(&range, 1),
            Err(EngineError::InvalidRange { .. })
        ));
    }

    proptest! {
        #[test]
        fn test_line_is_never_below_minimum(minimum in 0u32..100_000, spread in 0u32..100_000) {
            let minimum = Decimal::from(minimum);
            let maximum = minimum + Decimal::from(spread);
            prop_assert!(optimal_line(minimum, maximum).unwrap() >= minimum);
        }

        #[test]
        fn test_line_is_monotonic_in_maximum(
            minimum in 0u32..10_000,
            spread in 0u32..100_000,
            extra in 0u32..10_000,
        ) {
            let minimum = Decimal::from(minimum);
            let maximum = minimum + Decimal::from(spread);
            let wider = maximum + Decimal::from(extra);
            prop_assert!(
                optimal_line(minimum, maximum).unwrap() <= optimal_line(minimum, wider).unwrap()
            );
        }
    }
}
