//! Headline metrics for the currently filtered dataset.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::insights::InsightMetrics;

#[component]
pub fn InsightSummary(insights: Option<InsightMetrics>, total_count: usize) -> Element {
    let Some(insights) = insights else {
        return rsx! {};
    };

    let approval_pct = format::format_pct_fixed1(insights.approval_rate_pct);
    let avg_loan = format::format_inr_with_usd(insights.avg_loan_amount);
    let avg_income = format::format_inr_with_usd(insights.avg_income);

    let top_area = insights.property_impact.first().cloned();
    let trailing_area = insights.property_impact.last().cloned();

    rsx! {
        section { class: "insight-summary",
            div { class: "summary-card",
                h2 { "Dataset Overview" }
                p {
                    "This dataset contains "
                    strong { "{total_count}" }
                    " loan applications from "
                    strong { "India" }
                    " with information on applicant demographics, financial indicators, and "
                    "approval outcomes. All income values are annual income in Indian Rupees (₹). "
                    strong { "{approval_pct}" }
                    " of applications were approved."
                }
            }

            div { class: "metrics-grid",
                div { class: "metric-card",
                    span { class: "metric-label", "Average approved loan amount" }
                    span { class: "metric-value", "{avg_loan}" }
                }
                div { class: "metric-card",
                    span { class: "metric-label", "Average household income (annual)" }
                    span { class: "metric-value", "{avg_income}" }
                }
                if let Some(area) = top_area {
                    div { class: "metric-card",
                        span { class: "metric-label", "Best performing property area" }
                        span { class: "metric-value",
                            "{area.area} "
                            span { class: "metric-subvalue",
                                {format!("{} approval", format::format_rate_pct(area.approval_rate))}
                            }
                        }
                    }
                }
                if let Some(area) = trailing_area {
                    div { class: "metric-card",
                        span { class: "metric-label", "Lowest performing property area" }
                        span { class: "metric-value",
                            "{area.area} "
                            span { class: "metric-subvalue",
                                {format!("{} approval", format::format_rate_pct(area.approval_rate))}
                            }
                        }
                    }
                }
            }
        }
    }
}
