//! Cumulative stacked segments for two-series bar charts.
//!
//! The category order is fixed (approved first, rejected second) and shared
//! by every group, so colors and legends map consistently across bars.

/// One cumulative sub-range along the count axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Stacks approved-then-rejected counts for one group.
pub fn stack_pair(approved: usize, rejected: usize) -> [Segment; 2] {
    let approved = approved as f64;
    [
        Segment {
            start: 0.0,
            end: approved,
        },
        Segment {
            start: approved,
            end: approved + rejected as f64,
        },
    ]
}

/// Cumulative sweep over an arbitrary ordered count list.
pub fn stack_counts(counts: &[f64]) -> Vec<Segment> {
    let mut cursor = 0.0;
    counts
        .iter()
        .map(|&count| {
            let start = cursor;
            cursor += count;
            Segment { start, end: cursor }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_partitions_the_stacked_total() {
        let [approved, rejected] = stack_pair(3, 2);
        assert_eq!(approved.start, 0.0);
        assert_eq!(approved.end, 3.0);
        assert_eq!(rejected.start, 3.0);
        assert_eq!(rejected.end, 5.0);
        assert_eq!(approved.span() + rejected.span(), 5.0);
    }

    #[test]
    fn first_segment_starts_at_zero_even_when_empty() {
        let [approved, rejected] = stack_pair(0, 4);
        assert_eq!(approved.start, 0.0);
        assert_eq!(approved.end, 0.0);
        assert_eq!(rejected.end, 4.0);
    }

    #[test]
    fn sweep_ends_at_the_sum_of_counts() {
        let segments = stack_counts(&[2.0, 0.0, 5.0]);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[2].end, 7.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
