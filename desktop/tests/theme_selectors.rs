#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The dashboard markup relies on a fixed set of CSS classes in the unified
shared theme (ui/assets/theme/main.css). A refactor that drops or renames one
of them would ship a silently unstyled packaged build, so this test asserts
presence of the structural selectors up front.

A substring presence check is deliberate: it is an early warning, not a CSS
parser, and keeps the test dependency-free.

When introducing new structural CSS relied upon by Rust components, add the
selector to REQUIRED_SELECTORS.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app {",
    ".app-header",
    ".app-state",
    ".app-footer",
    // Insight summary
    ".insight-summary",
    ".summary-card",
    ".metrics-grid",
    ".metric-card",
    ".metric-label",
    ".metric-value",
    ".metric-subvalue",
    // Filter panel
    ".filter-panel",
    ".filter-header",
    ".filter-controls",
    ".filter-footer",
    ".reset-button",
    ".no-data",
    // Charts
    ".charts-grid",
    ".chart-card",
    ".chart-wrapper",
    ".axis-label",
    ".chart-tooltip",
    ".chart-tooltip--visible",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
