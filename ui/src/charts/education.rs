//! Stacked bars of loan outcomes per education level.

use dioxus::prelude::*;

use crate::charts::frame::{self, Margin};
use crate::charts::tooltip::{hit_rect, ChartTooltip, HitRegion, Tooltip};
use crate::charts::{APPROVED_COLOR, REJECTED_COLOR};
use crate::core::aggregate;
use crate::core::format;
use crate::core::record::Record;
use crate::core::scale::{BandScale, LinearScale};
use crate::core::stack;

const MARGIN: Margin = Margin::new(24.0, 140.0, 56.0, 64.0);

#[component]
pub fn EducationApprovalChart(records: Vec<Record>) -> Element {
    let tooltip = use_signal(|| Option::<Tooltip>::None);

    let mut groups = aggregate::group_by_category(&records, |record| &record.education);
    aggregate::sort_alphabetical(&mut groups);

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
                vec![
                    format!("Approved: {}", group.approved),
                    format!("Rejected: {}", group.rejected),
                    format!("Total: {}", group.total),
                    format!(
                        "Approval rate: {}",
                        format::format_rate_pct(group.approval_rate)
                    ),
                ],
            ),
        });

        let stacked = stack::stack_pair(group.approved, group.rejected);
        let layers = [
            ("Approved", group.approved, APPROVED_COLOR),
            ("Rejected", group.rejected, REJECTED_COLOR),
        ];
        for (segment, (label, count, color)) in stacked.into_iter().zip(layers) {
            let top = y.map(segment.end);
            let share = if group.total > 0 {
                count as f64 / group.total as f64
            } else {
                0.0
            };
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
                    vec![
                        format!("{label}: {count}"),
                        format!("Share: {}", format::format_rate_pct(share)),
                        format!("Total: {}", group.total),
                    ],
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
                h3 { "Education and loan approval" }
                p { "Compare approval rates between graduate and non-graduate applicants." }
            }
            div { class: "chart-wrapper",
                svg {
                    view_box: "0 0 {frame::CHART_WIDTH} {frame::CHART_HEIGHT}",
                    role: "img",
                    "aria-label": "Stacked bar chart showing education level and loan approval outcomes",
                    g { transform: MARGIN.plot_transform(),
                        {frame::band_axis(&x, inner_width, inner_height, false)}
                        {frame::linear_axis(&y, inner_height, 5, |v| format!("{v:.0}"))}
                        {frame::x_axis_label("Education level", inner_width, inner_height, MARGIN.bottom)}
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
