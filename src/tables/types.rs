//! Amount table types.

use rust_decimal::Decimal;

use crate::models::{PayrollCategory, TenureBucket};

/// Number of tenure breakpoints per gender, including the legacy `0` key.
pub const BUCKET_COUNT: usize = 6;

/// A fixed amount table keyed by payroll category and tenure bucket.
///
/// Rows follow [`PayrollCategory::ALL`]; columns follow `bucket_keys`.
#[derive(Debug)]
pub struct AmountTable {
    bucket_keys: [u32; BUCKET_COUNT],
    rows: [[u32; BUCKET_COUNT]; 4],
}

impl AmountTable {
    pub(crate) const fn new(
        bucket_keys: [u32; BUCKET_COUNT],
        rows: [[u32; BUCKET_COUNT]; 4],
    ) -> Self {
        Self { bucket_keys, rows }
    }

    /// Returns the bucket keys this table has columns for.
    pub fn bucket_keys(&self) -> &[u32] {
        &self.bucket_keys
    }

    /// Returns the amount at `[category][bucket]`, or `None` when the table
    /// has no column for the bucket.
    pub fn amount(&self, category: PayrollCategory, bucket: TenureBucket) -> Option<Decimal> {
        let column = self.bucket_keys.iter().position(|&key| key == bucket.key())?;
        Some(Decimal::from(self.rows[category.row()][column]))
    }
}

/// The minimum and maximum tables that apply to one gender.
#[derive(Debug, Clone, Copy)]
pub struct GenderTables {
    /// Minimum allowable amounts.
    pub minimum: &'static AmountTable,
    /// Maximum allowable amounts.
    pub maximum: &'static AmountTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: AmountTable = AmountTable::new(
        [0, 1, 2, 3, 4, 5],
        [
            [10, 11, 12, 13, 14, 15],
            [20, 21, 22, 23, 24, 25],
            [30, 31, 32, 33, 34, 35],
            [40, 41, 42, 43, 44, 45],
        ],
    );

    #[test]
    fn test_amount_resolves_row_and_column() {
        assert_eq!(
            TABLE.amount(PayrollCategory::C, TenureBucket::new(4)),
            Some(Decimal::from(34))
        );
        assert_eq!(
            TABLE.amount(PayrollCategory::A, TenureBucket::new(0)),
            Some(Decimal::from(10))
        );
    }

    #[test]
    fn test_amount_missing_column_is_none() {
        assert_eq!(TABLE.amount(PayrollCategory::B, TenureBucket::new(9)), None);
    }
}
