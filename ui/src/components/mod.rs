mod filter_panel;
mod insight_summary;

pub use filter_panel::FilterPanel;
pub use insight_summary::InsightSummary;
