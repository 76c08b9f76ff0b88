//! Billing ledger aggregation.
//!
//! The summary is recomputed from the full entry list on every call rather
//! than maintained incrementally, so it can never drift from the ledger.

use serde::Serialize;

use crate::status::BillingStatus;

/// Count + amount for one status bucket of the breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatusBucket {
    pub count: usize,
    pub amount: f64,
}

/// Per-status breakdown of a billing ledger. All three buckets are always
/// present, zeroed when empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BillingBreakdown {
    pub credited: StatusBucket,
    pub debited: StatusBucket,
    pub pending: StatusBucket,
}

impl BillingBreakdown {
    fn bucket_mut(&mut self, status: BillingStatus) -> &mut StatusBucket {
        match status {
            BillingStatus::Credited => &mut self.credited,
            BillingStatus::Debited => &mut self.debited,
            BillingStatus::Pending => &mut self.pending,
        }
    }
}

/// Aggregate totals over a billing ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingTotals {
    pub total_entries: usize,
    pub total_billing_amount: f64,
    pub breakdown: BillingBreakdown,
}

/// Compute totals and the per-status breakdown over `(status, amount)` pairs.
///
/// Entries with no status are aggregated as pending by the caller mapping
/// legacy rows into [`BillingStatus`].
pub fn summarize<I>(entries: I) -> BillingTotals
where
    I: IntoIterator<Item = (BillingStatus, f64)>,
{
    let mut totals = BillingTotals::default();
    for (status, amount) in entries {
        totals.total_entries += 1;
        totals.total_billing_amount += amount;
        let bucket = totals.breakdown.bucket_mut(status);
        bucket.count += 1;
        bucket.amount += amount;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_is_all_zeroes() {
        let totals = summarize(std::iter::empty::<(BillingStatus, f64)>());
        assert_eq!(totals.total_entries, 0);
        assert_eq!(totals.total_billing_amount, 0.0);
        assert_eq!(totals.breakdown, BillingBreakdown::default());
    }

    #[test]
    fn breakdown_matches_spec_scenario() {
        // [{amount: 500, credited}, {amount: 200, pending}]
        let totals = summarize([
            (BillingStatus::Credited, 500.0),
            (BillingStatus::Pending, 200.0),
        ]);

        assert_eq!(totals.total_entries, 2);
        assert_eq!(totals.total_billing_amount, 700.0);
        assert_eq!(
            totals.breakdown.credited,
            StatusBucket {
                count: 1,
                amount: 500.0
            }
        );
        assert_eq!(
            totals.breakdown.pending,
            StatusBucket {
                count: 1,
                amount: 200.0
            }
        );
        assert_eq!(
            totals.breakdown.debited,
            StatusBucket {
                count: 0,
                amount: 0.0
            }
        );
    }

    #[test]
    fn bucket_amounts_sum_to_total() {
        let entries = [
            (BillingStatus::Credited, 1200.0),
            (BillingStatus::Credited, 300.5),
            (BillingStatus::Debited, 450.0),
            (BillingStatus::Pending, 75.25),
            (BillingStatus::Pending, 0.0),
        ];
        let totals = summarize(entries);

        let bucket_sum = totals.breakdown.credited.amount
            + totals.breakdown.debited.amount
            + totals.breakdown.pending.amount;
        assert_eq!(bucket_sum, totals.total_billing_amount);

        let bucket_counts = totals.breakdown.credited.count
            + totals.breakdown.debited.count
            + totals.breakdown.pending.count;
        assert_eq!(bucket_counts, totals.total_entries);
    }
}
