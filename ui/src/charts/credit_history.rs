//! Stacked bars of loan outcomes for applicants with and without an
//! established credit history.

use dioxus::prelude::*;

use crate::charts::frame::{self, Margin};
use crate::charts::tooltip::{hit_rect, ChartTooltip, HitRegion, Tooltip};
use crate::charts::{APPROVED_COLOR, REJECTED_COLOR};
use crate::core::aggregate;
use crate::core::format;
use crate::core::record::Record;
use crate::core::scale::{BandScale, LinearScale};
use crate::core::stack;

const MARGIN: Margin = Margin::new(24.0, 140.0, 80.0, 64.0);

/// Fixed display order for the two derived credit-history categories.
const CATEGORY_ORDER: [&str; 2] = ["Has credit history", "No credit history"];

fn credit_label(record: &Record) -> &'static str {
    match record.credit_history {
        Some(value) if value == 1.0 => "Has credit history",
        Some(value) if value == 0.0 => "No credit history",
        _ => "",
    }
}

fn category_rank(key: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|known| *known == key)
        .unwrap_or(CATEGORY_ORDER.len())
}

#[component]
pub fn CreditHistoryChart(records: Vec<Record>) -> Element {
    let tooltip = use_signal(|| Option::<Tooltip>::None);

    let mut groups = aggregate::group_by_category(&records, |record| credit_label(record));
    groups.sort_by_key(|group| category_rank(&group.key));

    let inner_width = MARGIN.inner_width();
    let inner_height = MARGIN.inner_height();

    let x = BandScale::new(
        groups.iter().map(|group| group.key.clone()).collect(),
        (0.0, inner_width),
        0.4,
    );
    let max_total = groups.iter().map(|group| group.total).max().unwrap_or(0);
    let y = LinearScale::nice((0.0, max_total as f64), (inner_height, 0.0));

    let mut overlays = Vec::new();
    let mut segments = Vec::new();
    for group in &groups {
        let Some(slot) = x.position(&group.key) else {
            continue;
        };
        let anchor_left = slot + MARGIN.left + 8.0;
        let lines = vec![
            format!("Approved: {}", group.approved),
            format!("Rejected: {}", group.rejected),
            format!("Total: {}", group.total),
            format!(
                "Approval rate: {}",
                format::format_rate_pct(group.approval_rate)
            ),
        ];

        overlays.push(HitRegion {
            x: slot,
            y: 0.0,
            width: x.bandwidth(),
            height: inner_height,
            fill: None,
            tip: Tooltip::new(
                anchor_left,
                y.map(group.total as f64) + MARGIN.top - 32.0,
                group.key.clone(),
                lines.clone(),
            ),
        });

        let stacked = stack::stack_pair(group.approved, group.rejected);
        for (segment, color) in stacked.into_iter().zip([APPROVED_COLOR, REJECTED_COLOR]) {
            let top = y.map(segment.end);
            segments.push(HitRegion {
                x: slot,
                y: top,
                width: x.bandwidth(),
                height: y.map(segment.start) - top,
                fill: Some(color),
                tip: Tooltip::new(
                    anchor_left,
                    top + MARGIN.top - 32.0,
                    group.key.clone(),
                    lines.clone(),
                ),
            });
        }
    }

    let legend_entries = [
        ("Approved".to_string(), APPROVED_COLOR),
        ("Rejected".to_string(), REJECTED_COLOR),
    ];

    rsx! {
        article { class: "chart-card",
            header {
                h3 { "Credit history outcomes" }
                p { "See how an established credit history relates to approval outcomes." }
            }
            div { class: "chart-wrapper",
                svg {
                    view_box: "0 0 {frame::CHART_WIDTH} {frame::CHART_HEIGHT}",
                    role: "img",
                    "aria-label": "Stacked bar chart showing credit history and loan approval outcomes",
                    g { transform: MARGIN.plot_transform(),
                        {frame::band_axis(&x, inner_width, inner_height, true)}
                        {frame::linear_axis(&y, inner_height, 5, |v| format!("{v:.0}"))}
                        {frame::x_axis_label("Credit history", inner_width, inner_height, MARGIN.bottom)}
                        {frame::y_axis_label("Number of applicants", inner_height, MARGIN.left)}

                        for overlay in overlays {
                            {hit_rect(overlay, tooltip)}
                        }
                        for segment in segments {
                            {hit_rect(segment, tooltip)}
                        }
                    }
                    {frame::legend(&legend_entries, &MARGIN)}
                }
                ChartTooltip { tooltip: tooltip() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(credit: Option<f64>) -> Record {
        Record {
            credit_history: credit,
            loan_status: "Y".to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn labels_derive_from_the_numeric_field() {
        assert_eq!(credit_label(&record(Some(1.0))), "Has credit history");
        assert_eq!(credit_label(&record(Some(0.0))), "No credit history");
        assert_eq!(credit_label(&record(None)), "");
        assert_eq!(credit_label(&record(Some(3.0))), "");
    }

    #[test]
    fn has_history_sorts_before_no_history() {
        assert!(category_rank("Has credit history") < category_rank("No credit history"));
        assert!(category_rank("No credit history") < category_rank("anything else"));
    }
}
