//! Request types for decision intake.
//!
//! Requests carry the categorical inputs as text; they are parsed into the
//! typed model only when evaluated, so a malformed entry fails on its own
//! rather than failing the whole file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine;
use crate::error::EngineResult;
use crate::models::DecisionResult;

/// A file of decision requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequestFile {
    /// The requests to evaluate, in order.
    pub requests: Vec<DecisionRequest>,
}

/// A single decision request as received from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Caller-supplied identifier for the applicant.
    pub id: String,
    /// Payroll category code (`A`-`D`).
    pub payroll_category: String,
    /// Gender code (`m` or `f`).
    pub gender: String,
    /// The date the applicant first started employment.
    pub first_employment_date: NaiveDate,
}

impl DecisionRequest {
    /// Evaluates this request as of the given date.
    pub fn evaluate(&self, as_of: NaiveDate) -> EngineResult<DecisionResult> {
        engine::evaluate(
            &self.payroll_category,
            &self.gender,
            self.first_employment_date,
            as_of,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "id": "app_001",
            "payroll_category": "B",
            "gender": "m",
            "first_employment_date": "2024-04-04"
        }"#;

        let request: DecisionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, "app_001");
        assert_eq!(request.payroll_category, "B");
        assert_eq!(
            request.first_employment_date,
            NaiveDate::from_ymd_opt(2024, 4, 4).unwrap()
        );
    }

    #[test]
    fn test_deserialize_request_missing_field_fails() {
        let json = r#"{ "id": "app_001", "gender": "m", "first_employment_date": "2024-04-04" }"#;
        let result: Result<DecisionRequest, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("payroll_category"));
    }

    #[test]
    fn test_evaluate_request() {
        let request = DecisionRequest {
            id: "app_001".to_string(),
            payroll_category: "B".to_string(),
            gender: "m".to_string(),
            first_employment_date: NaiveDate::from_ymd_opt(2024, 4, 4).unwrap(),
        };

        let result = request.evaluate(as_of()).unwrap();
        assert_eq!(result.tenure_bucket.key(), 26);
    }

    #[test]
    fn test_evaluate_request_with_invalid_category() {
        let request = DecisionRequest {
            id: "app_002".to_string(),
            payroll_category: "E".to_string(),
            gender: "f".to_string(),
            first_employment_date: NaiveDate::from_ymd_opt(2024, 4, 4).unwrap(),
        };

        assert!(matches!(
            request.evaluate(as_of()),
            Err(EngineError::InvalidCategory { .. })
        ));
    }
}
