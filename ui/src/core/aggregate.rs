//! Categorical grouping and approval-rate aggregation.
//!
//! Groups are formed by exact string equality on a categorical key, in
//! first-seen order; groups with an empty key are discarded rather than
//! merged. A record with an empty `loan_status` counts in its group's
//! denominator but never the numerator.

use std::cmp::Ordering;

use crate::core::record::Record;

/// Fixed display order for property areas; unrecognized areas sort last.
pub const PROPERTY_AREA_ORDER: [&str; 3] = ["Rural", "Semiurban", "Urban"];

/// A categorical subset with derived count and rate metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub key: String,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
    pub approval_rate: f64,
}

/// Partitions records by `key`, preserving first-seen order. Records whose
/// key is empty are skipped; no zero-size group is ever produced.
pub fn group_by_category<F>(records: &[Record], key: F) -> Vec<CategoryGroup>
where
    F: Fn(&Record) -> &str,
{
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for record in records {
        let k = key(record);
        if k.is_empty() {
            continue;
        }

        let index = match groups.iter().position(|group| group.key == k) {
            Some(index) => index,
            None => {
                groups.push(CategoryGroup {
                    key: k.to_string(),
                    approved: 0,
                    rejected: 0,
                    total: 0,
                    approval_rate: 0.0,
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[index];
        group.total += 1;
        match record.loan_status.as_str() {
            "Y" => group.approved += 1,
            "N" => group.rejected += 1,
            _ => {}
        }
    }

    for group in &mut groups {
        group.approval_rate = group.approved as f64 / group.total as f64;
    }

    groups
}

/// Rank of an area in the fixed priority table; unknown keys rank last.
pub fn property_area_rank(area: &str) -> usize {
    PROPERTY_AREA_ORDER
        .iter()
        .position(|known| *known == area)
        .unwrap_or(PROPERTY_AREA_ORDER.len())
}

/// Stable sort into the fixed Rural / Semiurban / Urban order.
pub fn sort_by_property_area(groups: &mut [CategoryGroup]) {
    groups.sort_by_key(|group| property_area_rank(&group.key));
}

/// Default ordering for fields without a domain priority table.
pub fn sort_alphabetical(groups: &mut [CategoryGroup]) {
    groups.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Descending approval rate; ties keep their existing relative order.
pub fn sort_by_rate_descending(groups: &mut [CategoryGroup]) {
    groups.sort_by(|a, b| {
        b.approval_rate
            .partial_cmp(&a.approval_rate)
            .unwrap_or(Ordering::Equal)
    });
}
