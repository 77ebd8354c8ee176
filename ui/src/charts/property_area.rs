//! Approval-rate bars per property area, in the fixed area order.

use dioxus::prelude::*;

use crate::charts::frame::{self, Margin};
use crate::charts::tooltip::{hit_rect, ChartTooltip, HitRegion, Tooltip};
use crate::core::aggregate;
use crate::core::format;
use crate::core::record::Record;
use crate::core::scale::{BandScale, LinearScale};

const MARGIN: Margin = Margin::new(24.0, 140.0, 56.0, 64.0);

fn area_color(area: &str) -> &'static str {
    match area {
        "Rural" => "#3b82f6",
        "Semiurban" => "#10b981",
        "Urban" => "#f59e0b",
        _ => "#007bff",
    }
}

#[component]
pub fn PropertyAreaChart(records: Vec<Record>) -> Element {
    let tooltip = use_signal(|| Option::<Tooltip>::None);

    let mut groups = aggregate::group_by_category(&records, |record| &record.property_area);
    aggregate::sort_by_property_area(&mut groups);

    let inner_width = MARGIN.inner_width();
    let inner_height = MARGIN.inner_height();

    let x = BandScale::new(
        groups.iter().map(|group| group.key.clone()).collect(),
        (0.0, inner_width),
        0.35,
    );
    let max_rate = groups
        .iter()
        .map(|group| group.approval_rate)
        .fold(0.0, f64::max);
    let y = LinearScale::nice((0.0, max_rate), (inner_height, 0.0));

    let mut overlays = Vec::new();
    let mut bars = Vec::new();
    for group in &groups {
        let Some(slot) = x.position(&group.key) else {
            continue;
        };
        let top = y.map(group.approval_rate);
        let anchor_left = slot + MARGIN.left;
        let lines = vec![
            format!(
                "Approval rate: {}",
                format::format_pct_fixed1(group.approval_rate * 100.0)
            ),
            format!("Applications: {}", group.total),
        ];

        overlays.push(HitRegion {
            x: slot,
            y: 0.0,
            width: x.bandwidth(),
            height: inner_height,
            fill: None,
            tip: Tooltip::new(
                anchor_left,
                top + MARGIN.top - 24.0,
                group.key.clone(),
                lines.clone(),
            ),
        });
        bars.push(HitRegion {
            x: slot,
            y: top,
            width: x.bandwidth(),
            height: inner_height - top,
            fill: Some(area_color(&group.key)),
            tip: Tooltip::new(
                anchor_left,
                top + MARGIN.top - 24.0,
                group.key.clone(),
                lines,
            ),
        });
    }

    let legend_entries: Vec<(String, &'static str)> = groups
        .iter()
        .map(|group| (group.key.clone(), area_color(&group.key)))
        .collect();

    rsx! {
        article { class: "chart-card",
            header {
                h3 { "Property area trends" }
                p { "Compare loan approval rates and patterns across urban, rural, and semi-urban areas." }
            }
            div { class: "chart-wrapper",
                svg {
                    view_box: "0 0 {frame::CHART_WIDTH} {frame::CHART_HEIGHT}",
                    role: "img",
                    "aria-label": "Bar chart showing approval rate by property area",
                    g { transform: MARGIN.plot_transform(),
                        {frame::band_axis(&x, inner_width, inner_height, false)}
                        {frame::linear_axis(&y, inner_height, 5, |v| format::format_rate_pct(v))}
                        {frame::x_axis_label("Property area", inner_width, inner_height, MARGIN.bottom)}
                        {frame::y_axis_label("Approval rate", inner_height, MARGIN.left)}

                        for overlay in overlays {
                            {hit_rect(overlay, tooltip)}
                        }
                        for bar in bars {
                            {hit_rect(bar, tooltip)}
                        }
                    }
                    {frame::legend(&legend_entries, &MARGIN)}
                }
                ChartTooltip { tooltip: tooltip() }
            }
        }
    }
}
