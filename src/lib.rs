//! Credit Line Decision Engine
//!
//! This crate computes a credit line recommendation for an applicant from
//! their payroll category, gender and date of first employment, using fixed
//! amount tables keyed by payroll category and tenure bucket.

#![warn(missing_docs)]

pub mod calculation;
pub mod engine;
pub mod error;
pub mod intake;
pub mod models;
pub mod tables;
pub mod telemetry;
