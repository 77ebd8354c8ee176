//! Shared chart geometry and SVG axis/legend rendering.

use dioxus::prelude::*;

use crate::core::scale::{BandScale, LinearScale};

pub const CHART_WIDTH: f64 = 420.0;
pub const CHART_HEIGHT: f64 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn inner_width(&self) -> f64 {
        CHART_WIDTH - self.left - self.right
    }

    pub fn inner_height(&self) -> f64 {
        CHART_HEIGHT - self.top - self.bottom
    }

    pub fn plot_transform(&self) -> String {
        format!("translate({},{})", self.left, self.top)
    }
}

/// Bottom axis for a band scale; labels optionally rotated for long ranges.
pub fn band_axis(scale: &BandScale, width: f64, height: f64, rotate_labels: bool) -> Element {
    let transform = format!("translate(0,{height})");
    let ticks: Vec<(String, String)> = scale
        .domain()
        .iter()
        .map(|key| {
            let center = scale.position(key).unwrap_or(0.0) + scale.bandwidth() / 2.0;
            (format!("translate({center},0)"), key.clone())
        })
        .collect();

    rsx! {
        g { class: "x-axis", transform: transform,
            line { x1: "0", y1: "0", x2: "{width}", y2: "0", stroke: "currentColor" }
            for (tick_transform, label) in ticks {
                g { transform: tick_transform,
                    line { y1: "0", y2: "6", stroke: "currentColor" }
                    if rotate_labels {
                        text {
                            dx: "-0.6em",
                            dy: "0.6em",
                            transform: "rotate(-45)",
                            text_anchor: "end",
                            font_size: "0.75rem",
                            "{label}"
                        }
                    } else {
                        text {
                            y: "9",
                            dy: "0.71em",
                            text_anchor: "middle",
                            font_size: "0.75rem",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Left axis for a linear scale with caller-supplied tick formatting.
pub fn linear_axis<F>(scale: &LinearScale, height: f64, tick_count: usize, format: F) -> Element
where
    F: Fn(f64) -> String,
{
    let ticks: Vec<(String, String)> = scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| {
            let position = scale.map(value);
            (format!("translate(0,{position})"), format(value))
        })
        .collect();

    rsx! {
        g { class: "y-axis",
            line { x1: "0", y1: "{height}", x2: "0", y2: "0", stroke: "currentColor" }
            for (tick_transform, label) in ticks {
                g { transform: tick_transform,
                    line { x1: "-6", x2: "0", stroke: "currentColor" }
                    text {
                        x: "-9",
                        dy: "0.32em",
                        text_anchor: "end",
                        font_size: "0.75rem",
                        "{label}"
                    }
                }
            }
        }
    }
}

pub fn x_axis_label(label: &str, width: f64, height: f64, bottom_margin: f64) -> Element {
    let x = width / 2.0;
    let y = height + bottom_margin - 8.0;
    rsx! {
        text { class: "axis-label", x: "{x}", y: "{y}", text_anchor: "middle", "{label}" }
    }
}

pub fn y_axis_label(label: &str, height: f64, left_margin: f64) -> Element {
    let x = -height / 2.0;
    let y = -left_margin + 16.0;
    rsx! {
        text {
            class: "axis-label",
            x: "{x}",
            y: "{y}",
            transform: "rotate(-90)",
            text_anchor: "middle",
            "{label}"
        }
    }
}

/// Color legend placed in the right margin.
pub fn legend(entries: &[(String, &'static str)], margin: &Margin) -> Element {
    let transform = format!(
        "translate({},{})",
        CHART_WIDTH - margin.right + 20.0,
        margin.top
    );
    let rows: Vec<(String, String, &'static str)> = entries
        .iter()
        .enumerate()
        .map(|(index, (label, color))| {
            (format!("translate(0, {})", index * 24), label.clone(), *color)
        })
        .collect();

    rsx! {
        g { class: "legend", transform: transform,
            for (row_transform, label, color) in rows {
                g { transform: row_transform,
                    rect { x: "0", y: "-10", width: "16", height: "16", fill: "{color}" }
                    text { x: "24", y: "0", font_size: "0.8rem", "{label}" }
                }
            }
        }
    }
}
