//! Hover interaction: hit regions, tooltip state, and tooltip rendering.
//!
//! Each chart owns one `Signal<Option<Tooltip>>`, so at most one tooltip is
//! active per chart. Entering a hit region resolves the underlying datum to
//! prepared content plus an anchor; leaving clears it. Invisible full-height
//! overlay columns widen the target for small segments, and visible segments
//! are painted after them so the most specific region wins where they overlap.

use dioxus::prelude::*;

/// The single active hover-derived annotation shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Anchor offset from the hovered shape, in chart pixels.
    pub left: f64,
    pub top: f64,
    pub title: String,
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn new(left: f64, top: f64, title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            left,
            top,
            title: title.into(),
            lines,
        }
    }
}

/// One pointer-sensitive rectangle: a visible stacked segment or bar when
/// `fill` is set, otherwise an invisible overlay column.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<&'static str>,
    pub tip: Tooltip,
}

/// Renders a hit region wired to the chart's tooltip signal.
pub fn hit_rect(region: HitRegion, mut tooltip: Signal<Option<Tooltip>>) -> Element {
    let HitRegion {
        x,
        y,
        width,
        height,
        fill,
        tip,
    } = region;

    match fill {
        Some(color) => rsx! {
            rect {
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                fill: "{color}",
                opacity: "0.9",
                onmouseenter: move |_| tooltip.set(Some(tip.clone())),
                onmouseleave: move |_| tooltip.set(None),
            }
        },
        None => rsx! {
            rect {
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                fill: "transparent",
                style: "cursor: pointer;",
                onmouseenter: move |_| tooltip.set(Some(tip.clone())),
                onmouseleave: move |_| tooltip.set(None),
            }
        },
    }
}

/// The floating tooltip element inside a chart wrapper.
#[component]
pub fn ChartTooltip(tooltip: Option<Tooltip>) -> Element {
    match tooltip {
        Some(tip) => {
            let position = format!("left: {}px; top: {}px;", tip.left, tip.top);
            rsx! {
                div { class: "chart-tooltip chart-tooltip--visible", style: position,
                    strong { "{tip.title}" }
                    for line in tip.lines.iter() {
                        br {}
                        "{line}"
                    }
                }
            }
        }
        None => rsx! {
            div { class: "chart-tooltip" }
        },
    }
}
