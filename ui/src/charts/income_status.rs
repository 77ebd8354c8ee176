//! Stacked bars of approved/rejected applications per income range.

use dioxus::prelude::*;

use crate::charts::frame::{self, Margin};
use crate::charts::tooltip::{hit_rect, ChartTooltip, HitRegion, Tooltip};
use crate::charts::{APPROVED_COLOR, REJECTED_COLOR};
use crate::core::binning;
use crate::core::record::Record;
use crate::core::scale::{BandScale, LinearScale};
use crate::core::stack;

const MARGIN: Margin = Margin::new(24.0, 140.0, 80.0, 72.0);

#[component]
pub fn IncomeStatusChart(records: Vec<Record>) -> Element {
    let tooltip = use_signal(|| Option::<Tooltip>::None);

    let bins = binning::bin_by_total_income(&records);
    let inner_width = MARGIN.inner_width();
    let inner_height = MARGIN.inner_height();

    let x = BandScale::new(
        bins.iter().map(|bin| bin.label.clone()).collect(),
        (0.0, inner_width),
        0.4,
    );
    let max_total = bins.iter().map(|bin| bin.total).max().unwrap_or(0);
    let y = LinearScale::nice((0.0, max_total as f64), (inner_height, 0.0));

    let mut overlays = Vec::new();
    let mut segments = Vec::new();
    for bin in &bins {
        let Some(slot) = x.position(&bin.label) else {
            continue;
        };
        let lines = vec![
            format!("Approved: {}", bin.approved),
            format!("Rejected: {}", bin.rejected),
            format!("Total: {}", bin.total),
        ];
        let anchor_left = slot + MARGIN.left + 8.0;

        overlays.push(HitRegion {
            x: slot,
            y: 0.0,
            width: x.bandwidth(),
            height: inner_height,
            fill: None,
            tip: Tooltip::new(
                anchor_left,
                y.map(bin.total as f64) + MARGIN.top - 32.0,
                bin.label.clone(),
                lines.clone(),
            ),
        });

        let stacked = stack::stack_pair(bin.approved, bin.rejected);
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
                    bin.label.clone(),
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
                h3 { "Income vs loan status" }
                p {
                    "Compare income ranges for approved and rejected applications. Income shown is annual income in Indian Rupees (₹)."
                }
            }
            div { class: "chart-wrapper",
                svg {
                    view_box: "0 0 {frame::CHART_WIDTH} {frame::CHART_HEIGHT}",
                    role: "img",
                    "aria-label": "Stacked bar chart showing income ranges by loan approval status",
                    g { transform: MARGIN.plot_transform(),
                        {frame::band_axis(&x, inner_width, inner_height, true)}
                        {frame::linear_axis(&y, inner_height, 5, |v| format!("{v:.0}"))}
                        {frame::x_axis_label("Income range", inner_width, inner_height, MARGIN.bottom)}
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
