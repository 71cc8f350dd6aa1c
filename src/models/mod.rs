//! Core data models for the Credit Line Decision Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod applicant;
mod decision_result;
mod tenure_bucket;

pub use applicant::{DecisionInput, Gender, PayrollCategory};
pub use decision_result::{AmountRange, AuditStep, AuditTrace, AuditWarning, DecisionResult};
pub use tenure_bucket::TenureBucket;
