//! SVG chart components and their shared frame, scale, and hover plumbing.

pub mod frame;
pub mod tooltip;

mod credit_history;
mod education;
mod income_status;
mod property_area;

pub use credit_history::CreditHistoryChart;
pub use education::EducationApprovalChart;
pub use income_status::IncomeStatusChart;
pub use property_area::PropertyAreaChart;
pub use tooltip::{ChartTooltip, Tooltip};

/// Fill for approved segments, shared so legends stay consistent.
pub const APPROVED_COLOR: &str = "#22c55e";
/// Fill for rejected segments.
pub const REJECTED_COLOR: &str = "#ef4444";
