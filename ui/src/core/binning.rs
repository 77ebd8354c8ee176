//! Variable-width income binning with per-bin outcome counts.
//!
//! Bin edges come from a fixed threshold table plus one synthetic trailing
//! edge at `max + 1`, so the dataset maximum always falls inside a bin
//! instead of on a boundary. Membership is lower-inclusive, upper-exclusive.
//! Records with non-positive total income are excluded entirely, and empty
//! bins are dropped from the output.

use crate::core::record::Record;

/// Fixed lower edges for the household-income histogram, in rupees.
pub const INCOME_THRESHOLDS: [f64; 8] = [
    0.0, 5000.0, 10000.0, 15000.0, 20000.0, 30000.0, 50000.0, 75000.0,
];

/// Bins reaching past this boundary get the open-ended "₹Nk+" label.
pub const OVERFLOW_BOUNDARY: f64 = 75000.0;

/// A realized income range with outcome counts for stacking.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeBin {
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
    pub approval_rate: f64,
}

/// Histograms records by total income over the fixed thresholds.
pub fn bin_by_total_income(records: &[Record]) -> Vec<IncomeBin> {
    let eligible: Vec<&Record> = records
        .iter()
        .filter(|record| record.total_income > 0.0)
        .collect();
    if eligible.is_empty() {
        return Vec::new();
    }

    let max_income = eligible
        .iter()
        .map(|record| record.total_income)
        .fold(f64::MIN, f64::max);

    let mut edges: Vec<f64> = INCOME_THRESHOLDS.to_vec();
    edges.push(max_income + 1.0);
    edges.sort_by(f64::total_cmp);
    edges.dedup();

    let mut bins: Vec<IncomeBin> = edges
        .windows(2)
        .map(|edge| IncomeBin {
            label: range_label(edge[0], edge[1]),
            lower: edge[0],
            upper: edge[1],
            approved: 0,
            rejected: 0,
            total: 0,
            approval_rate: 0.0,
        })
        .collect();

    for record in &eligible {
        let income = record.total_income;
        if let Some(bin) = bins
            .iter_mut()
            .find(|bin| income >= bin.lower && income < bin.upper)
        {
            bin.total += 1;
            match record.loan_status.as_str() {
                "Y" => bin.approved += 1,
                "N" => bin.rejected += 1,
                _ => {}
            }
        }
    }

    bins.retain(|bin| bin.total > 0);
    for bin in &mut bins {
        bin.approval_rate = bin.approved as f64 / bin.total as f64;
    }
    bins
}

fn range_label(lower: f64, upper: f64) -> String {
    if upper > OVERFLOW_BOUNDARY {
        format!("₹{:.0}k+", lower / 1000.0)
    } else {
        format!("₹{:.0}k - ₹{:.0}k", lower / 1000.0, upper / 1000.0)
    }
}
