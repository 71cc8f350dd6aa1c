//! Fixed credit amount tables.
//!
//! Four immutable tables (minimum and maximum, for each gender) resolve a
//! payroll category and tenure bucket to an allowable credit amount. The
//! tables are process-wide constants and are not configurable.
//!
//! # Example
//!
//! ```
//! use credit_line_engine::models::{Gender, PayrollCategory, TenureBucket};
//! use credit_line_engine::tables;
//! use rust_decimal::Decimal;
//!
//! let tables = tables::for_gender(Gender::Male);
//! let minimum = tables.minimum.amount(PayrollCategory::B, TenureBucket::new(26));
//! assert_eq!(minimum, Some(Decimal::new(1000, 0)));
//! ```

mod types;

pub use types::{AmountTable, BUCKET_COUNT, GenderTables};

use crate::models::Gender;

const MALE_BUCKET_KEYS: [u32; BUCKET_COUNT] = [0, 26, 27, 28, 29, 30];
const FEMALE_BUCKET_KEYS: [u32; BUCKET_COUNT] = [0, 24, 25, 26, 27, 28];

/// Minimum amounts for male applicants.
pub static MIN_AMOUNT_MALE: AmountTable = AmountTable::new(
    MALE_BUCKET_KEYS,
    [
        [100, 100, 400, 900, 100, 600],
        [1000, 1000, 600, 1000, 1000, 1000],
        [400, 400, 200, 200, 1000, 600],
        [400, 400, 300, 500, 900, 1000],
    ],
);

/// Maximum amounts for male applicants.
pub static MAX_AMOUNT_MALE: AmountTable = AmountTable::new(
    MALE_BUCKET_KEYS,
    [
        [4900, 4900, 4700, 4600, 4600, 4500],
        [4700, 4700, 4400, 5000, 4400, 4900],
        [5000, 5000, 4700, 5000, 4200, 4600],
        [4400, 4400, 4700, 4300, 4900, 4300],
    ],
);

/// Minimum amounts for female applicants.
pub static MIN_AMOUNT_FEMALE: AmountTable = AmountTable::new(
    FEMALE_BUCKET_KEYS,
    [
        [800, 800, 800, 800, 600, 200],
        [800, 800, 700, 100, 600, 700],
        [200, 200, 900, 700, 800, 100],
        [500, 500, 1000, 600, 400, 700],
    ],
);

/// Maximum amounts for female applicants.
pub static MAX_AMOUNT_FEMALE: AmountTable = AmountTable::new(
    FEMALE_BUCKET_KEYS,
    [
        [4000, 4000, 4200, 4100, 4200, 4500],
        [4700, 4700, 4200, 4500, 4300, 4400],
        [4600, 4600, 4900, 4600, 4700, 4000],
        [5000, 5000, 4900, 4700, 5000, 4300],
    ],
);

/// Returns the minimum and maximum tables for a gender.
pub fn for_gender(gender: Gender) -> GenderTables {
    match gender {
        Gender::Male => GenderTables {
            minimum: &MIN_AMOUNT_MALE,
            maximum: &MAX_AMOUNT_MALE,
        },
        Gender::Female => GenderTables {
            minimum: &MIN_AMOUNT_FEMALE,
            maximum: &MAX_AMOUNT_FEMALE,
        },
    }
}
