//! Summary counters for the dashboard header.

use serde::Serialize;

use crate::model::{Property, Status};

/// Per-status counts. `total` always equals the sum of the three buckets
/// because [`Status`] is a closed enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub available: usize,
    pub reserved: usize,
    pub sold: usize,
}

impl Stats {
    /// Single pass over the records.
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Property>,
    {
        let mut stats = Stats::default();
        for record in records {
            stats.total += 1;
            match record.status {
                Status::Available => stats.available += 1,
                Status::Reserved => stats.reserved += 1,
                Status::Sold => stats.sold += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{sample_record, sample_records};

    #[test]
    fn test_compute_on_canonical_records() {
        let records = sample_records();
        let stats = Stats::compute(&records);
        assert_eq!(
            stats,
            Stats {
                total: 3,
                available: 1,
                reserved: 1,
                sold: 1,
            }
        );
    }

    #[test]
    fn test_compute_on_empty_input() {
        let stats = Stats::compute(std::iter::empty());
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_total_equals_sum_of_buckets() {
        let mut records = sample_records();
        records.push(sample_record("P001")); // duplicate status mix is fine here
        let stats = Stats::compute(&records);
        assert_eq!(stats.total, stats.available + stats.reserved + stats.sold);
        assert_eq!(stats.available, 2);
    }
}
