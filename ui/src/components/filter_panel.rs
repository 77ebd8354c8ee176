//! The five-selector filter panel and its reset control.

use dioxus::prelude::*;

use crate::core::filter::{Criteria, FilterField, FilterOptions, Selection};

/// Display text for a raw option value. Credit-history choices are stored as
/// "1"/"0" but shown as words.
fn option_label(field: FilterField, value: &str) -> String {
    if field == FilterField::CreditHistory {
        match value {
            "1" => return "Has credit history".to_string(),
            "0" => return "No credit history".to_string(),
            _ => {}
        }
    }
    value.to_string()
}

fn filter_select(
    label: &'static str,
    id: &'static str,
    field: FilterField,
    current: &Selection,
    options: &[String],
    on_filter_change: EventHandler<(FilterField, Selection)>,
) -> Element {
    let current_value = current.option_value().to_string();
    let rows: Vec<(String, String, bool)> = options
        .iter()
        .map(|value| {
            (
                value.clone(),
                option_label(field, value),
                *value == current_value,
            )
        })
        .collect();

    rsx! {
        label { r#for: id,
            "{label}"
            select {
                id,
                value: "{current_value}",
                onchange: move |event| {
                    on_filter_change.call((field, Selection::from_option_value(&event.value())));
                },
                for (value, display, selected) in rows {
                    option { value: "{value}", selected, "{display}" }
                }
            }
        }
    }
}

#[component]
pub fn FilterPanel(
    filters: Criteria,
    options: FilterOptions,
    total_records: usize,
    total_available: usize,
    on_filter_change: EventHandler<(FilterField, Selection)>,
) -> Element {
    let filtered_percentage = if total_available > 0 {
        ((total_records as f64 / total_available as f64) * 100.0).round() as i64
    } else {
        0
    };

    rsx! {
        div { class: "filter-panel",
            div { class: "filter-header",
                h2 { "Filters" }
                p {
                    "Use the dropdowns below to filter the dataset by different attributes. "
                    "All charts update automatically to show only the selected subset of applicants."
                }
            }

            div { class: "filter-controls",
                {filter_select(
                    "Property Area",
                    "propertyArea-filter",
                    FilterField::PropertyArea,
                    &filters.property_area,
                    &options.property_areas,
                    on_filter_change,
                )}
                {filter_select(
                    "Education",
                    "education-filter",
                    FilterField::Education,
                    &filters.education,
                    &options.educations,
                    on_filter_change,
                )}
                {filter_select(
                    "Gender",
                    "gender-filter",
                    FilterField::Gender,
                    &filters.gender,
                    &options.genders,
                    on_filter_change,
                )}
                {filter_select(
                    "Credit History",
                    "creditHistory-filter",
                    FilterField::CreditHistory,
                    &filters.credit_history,
                    &options.credit_histories,
                    on_filter_change,
                )}
                {filter_select(
                    "Loan Status",
                    "loanStatus-filter",
                    FilterField::LoanStatus,
                    &filters.loan_status,
                    &options.loan_statuses,
                    on_filter_change,
                )}
            }

            div { class: "filter-footer",
                p {
                    "Showing "
                    strong { "{total_records}" }
                    " applicants ({filtered_percentage}% of dataset)."
                }
                button {
                    r#type: "button",
                    class: "reset-button",
                    onclick: move |_| {
                        on_filter_change.call((FilterField::PropertyArea, Selection::All));
                        on_filter_change.call((FilterField::Education, Selection::All));
                        on_filter_change.call((FilterField::Gender, Selection::All));
                        on_filter_change.call((FilterField::CreditHistory, Selection::All));
                        on_filter_change.call((FilterField::LoanStatus, Selection::All));
                    },
                    "Reset filters"
                }
            }
        }
    }
}
