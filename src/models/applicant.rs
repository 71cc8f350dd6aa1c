//! Applicant model and related types.
//!
//! This module defines the categorical inputs of a credit line decision
//! ([`Gender`] and [`PayrollCategory`]) and the typed [`DecisionInput`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The applicant's gender, which selects the amount tables and the
/// tenure bucket boundaries.
///
/// # Example
///
/// ```
/// use credit_line_engine::models::Gender;
///
/// let gender: Gender = "f".parse().unwrap();
/// assert_eq!(gender, Gender::Female);
/// assert_eq!(gender.code(), "f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Textual code `m`.
    #[serde(rename = "m")]
    Male,
    /// Textual code `f`.
    #[serde(rename = "f")]
    Female,
}

impl Gender {
    /// Returns the textual code used at the interface.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Gender::Male),
            "f" => Ok(Gender::Female),
            other => Err(EngineError::InvalidGender {
                value: other.to_string(),
            }),
        }
    }
}

/// The applicant's payroll category.
///
/// Matching is exact and case-sensitive: `"a"` is not a valid category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayrollCategory {
    /// Category `A`.
    A,
    /// Category `B`.
    B,
    /// Category `C`.
    C,
    /// Category `D`.
    D,
}

impl PayrollCategory {
    /// All categories in table row order.
    pub const ALL: [PayrollCategory; 4] = [
        PayrollCategory::A,
        PayrollCategory::B,
        PayrollCategory::C,
        PayrollCategory::D,
    ];

    /// Returns the textual code used at the interface.
    pub fn code(self) -> &'static str {
        match self {
            PayrollCategory::A => "A",
            PayrollCategory::B => "B",
            PayrollCategory::C => "C",
            PayrollCategory::D => "D",
        }
    }

    /// Row index of this category in the amount tables.
    pub(crate) fn row(self) -> usize {
        match self {
            PayrollCategory::A => 0,
            PayrollCategory::B => 1,
            PayrollCategory::C => 2,
            PayrollCategory::D => 3,
        }
    }
}

impl fmt::Display for PayrollCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PayrollCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(PayrollCategory::A),
            "B" => Ok(PayrollCategory::B),
            "C" => Ok(PayrollCategory::C),
            "D" => Ok(PayrollCategory::D),
            other => Err(EngineError::InvalidCategory {
                value: other.to_string(),
            }),
        }
    }
}

/// The validated input of a single credit line decision.
///
/// `as_of` is the caller's notion of "now"; the engine never reads the
/// system clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionInput {
    /// The applicant's payroll category.
    pub payroll_category: PayrollCategory,
    /// The applicant's gender.
    pub gender: Gender,
    /// The date the applicant first started employment.
    pub first_employment_date: NaiveDate,
    /// The date the decision is evaluated on.
    pub as_of: NaiveDate,
}
