//! Dataset-level overview metrics for the summary cards.
//!
//! Computed over the full (unfiltered) dataset so the headline figures stay
//! stable while the charts respond to filters.

use crate::core::aggregate::{self, CategoryGroup};
use crate::core::record::Record;

/// Per-area approval ranking entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyImpact {
    pub area: String,
    pub approval_rate: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightMetrics {
    /// Share of applications approved, in percent.
    pub approval_rate_pct: f64,
    /// Mean loan amount across approved applications with a numeric amount.
    pub avg_loan_amount: f64,
    /// Mean total household income across all applications.
    pub avg_income: f64,
    /// Areas ranked by approval rate, best first; empty areas dropped.
    pub property_impact: Vec<PropertyImpact>,
}

/// None for an empty dataset; the summary simply is not shown then.
pub fn compute(records: &[Record]) -> Option<InsightMetrics> {
    if records.is_empty() {
        return None;
    }

    let approved: Vec<&Record> = records
        .iter()
        .filter(|record| record.loan_status == "Y")
        .collect();
    let approval_rate_pct = approved.len() as f64 / records.len() as f64 * 100.0;

    let avg_loan_amount = mean(approved.iter().filter_map(|record| record.loan_amount));
    let avg_income = mean(records.iter().map(|record| record.total_income));

    let mut groups = aggregate::group_by_category(records, |record| &record.property_area);
    aggregate::sort_by_rate_descending(&mut groups);

    Some(InsightMetrics {
        approval_rate_pct,
        avg_loan_amount,
        avg_income,
        property_impact: groups.into_iter().map(impact_entry).collect(),
    })
}

fn impact_entry(group: CategoryGroup) -> PropertyImpact {
    PropertyImpact {
        area: group.key,
        approval_rate: group.approval_rate,
        count: group.total,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(area: &str, status: &str, loan: Option<f64>, income: f64) -> Record {
        Record {
            property_area: area.to_string(),
            loan_status: status.to_string(),
            loan_amount: loan,
            total_income: income,
            ..Record::default()
        }
    }

    #[test]
    fn empty_dataset_yields_no_insights() {
        assert_eq!(compute(&[]), None);
    }

    #[test]
    fn headline_metrics_cover_the_whole_dataset() {
        let records = vec![
            record("Rural", "Y", Some(100.0), 4000.0),
            record("Urban", "N", Some(900.0), 6000.0),
            record("Rural", "Y", None, 2000.0),
            record("Semiurban", "Y", Some(140.0), 8000.0),
        ];
        let insights = compute(&records).unwrap();

        assert_eq!(insights.approval_rate_pct, 75.0);
        // Only approved records with a numeric amount contribute.
        assert_eq!(insights.avg_loan_amount, 120.0);
        assert_eq!(insights.avg_income, 5000.0);
    }

    #[test]
    fn property_impact_is_ranked_best_first() {
        let records = vec![
            record("Urban", "N", None, 1.0),
            record("Rural", "Y", None, 1.0),
            record("", "Y", None, 1.0),
        ];
        let insights = compute(&records).unwrap();
        assert_eq!(insights.property_impact.len(), 2);
        assert_eq!(insights.property_impact[0].area, "Rural");
        assert_eq!(insights.property_impact[1].area, "Urban");
    }
}
