//! Batch planning: how a record set of a given length is cut into batches.

use serde::{Deserialize, Serialize};

/// Largest batch the upload endpoint accepts in one request.
pub const MAX_BATCH_SIZE: usize = 1000;

/// Three-tier batch size policy: 1000 from 1000 records up, 100 from 100
/// records up, 10 below that.
pub fn batch_size_for(record_count: usize) -> usize {
    if record_count >= MAX_BATCH_SIZE {
        MAX_BATCH_SIZE
    } else if record_count >= 100 {
        100
    } else {
        10
    }
}

/// One contiguous slice of a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSpan {
    /// 1-based sequence number.
    pub number: usize,
    /// Inclusive zero-based bounds into the record set.
    pub start: usize,
    pub end: usize,
}

impl BatchSpan {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Range label sent with the batch, e.g. `"10 to 19"`.
    pub fn label(&self) -> String {
        format!("{} to {}", self.start, self.end)
    }
}

/// Batch layout for one upload run. Fixed once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    record_count: usize,
    batch_size: usize,
}

impl BatchPlan {
    pub fn for_len(record_count: usize) -> Self {
        Self {
            record_count,
            batch_size: batch_size_for(record_count),
        }
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn total_batches(&self) -> usize {
        self.record_count.div_ceil(self.batch_size)
    }

    /// Span of batch `number` (1-based), or `None` past the last batch.
    pub fn span(&self, number: usize) -> Option<BatchSpan> {
        if number == 0 || number > self.total_batches() {
            return None;
        }
        let start = (number - 1) * self.batch_size;
        let end = (start + self.batch_size - 1).min(self.record_count - 1);
        Some(BatchSpan { number, start, end })
    }

    /// All spans in increasing sequence-number order.
    pub fn spans(&self) -> impl Iterator<Item = BatchSpan> + '_ {
        (1..=self.total_batches()).filter_map(|number| self.span(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_size_follows_three_tiers() {
        assert_eq!(batch_size_for(1), 10);
        assert_eq!(batch_size_for(99), 10);
        assert_eq!(batch_size_for(100), 100);
        assert_eq!(batch_size_for(999), 100);
        assert_eq!(batch_size_for(1000), 1000);
        assert_eq!(batch_size_for(25_000), 1000);
    }

    #[test]
    fn twenty_five_records_make_three_batches() {
        let plan = BatchPlan::for_len(25);
        assert_eq!(plan.batch_size(), 10);
        assert_eq!(plan.total_batches(), 3);

        let ranges: Vec<_> = plan.spans().map(|s| (s.start, s.end)).collect();
        assert_eq!(ranges, vec![(0, 9), (10, 19), (20, 24)]);
        assert_eq!(plan.span(3).map(|s| s.label()), Some("20 to 24".to_string()));
    }

    #[test]
    fn spans_partition_every_length_exactly_once() {
        for len in [1, 9, 10, 11, 99, 100, 101, 250, 999, 1000, 1001, 2500] {
            let plan = BatchPlan::for_len(len);
            let mut next = 0;
            for (i, span) in plan.spans().enumerate() {
                assert_eq!(span.number, i + 1);
                assert_eq!(span.start, next, "gap or overlap at len {len}");
                assert!(span.len() <= plan.batch_size());
                assert!(span.len() <= MAX_BATCH_SIZE);
                next = span.end + 1;
            }
            assert_eq!(next, len, "spans do not cover len {len}");
            assert_eq!(plan.spans().count(), plan.total_batches());
        }
    }

    #[test]
    fn span_outside_plan_is_none() {
        let plan = BatchPlan::for_len(25);
        assert!(plan.span(0).is_none());
        assert!(plan.span(4).is_none());
    }

    #[test]
    fn empty_plan_has_no_batches() {
        let plan = BatchPlan::for_len(0);
        assert_eq!(plan.total_batches(), 0);
        assert_eq!(plan.spans().count(), 0);
    }
}
