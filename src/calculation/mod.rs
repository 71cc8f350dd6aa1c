//! Calculation logic for the Credit Line Decision Engine.
//!
//! This module contains the individual decision rules: tenure calculation,
//! tenure normalization into table buckets, amount lookup, and the optimal
//! line formula.

mod amount_lookup;
mod optimal_line;
mod tenure;
mod tenure_bucket;

pub use amount_lookup::{AmountLookupResult, lookup_amounts};
pub use optimal_line::{
    OptimalLineResult, calculate_optimal_line, linear_spread_rate, optimal_line,
};
pub use tenure::{TenureResult, calculate_tenure, months_between};
pub use tenure_bucket::{
    FEMALE_TENURE_CEILING, FEMALE_TENURE_FLOOR, MALE_TENURE_CEILING, MALE_TENURE_FLOOR,
    NormalizedTenureResult, bucket_for, normalize_tenure, tenure_bounds,
};
