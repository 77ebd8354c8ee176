//! The single dashboard page: dataset load, derived state, and layout.

use dioxus::prelude::*;

use crate::charts::{
    CreditHistoryChart, EducationApprovalChart, IncomeStatusChart, PropertyAreaChart,
};
use crate::components::{FilterPanel, InsightSummary};
use crate::core::filter::{Criteria, FilterField, FilterOptions, Selection};
use crate::core::insights;
use crate::core::loader::{self, LoadToken};
use crate::core::record::{RawRecord, Record};

const LOAD_FAILURE_MESSAGE: &str =
    "Unable to load the loan eligibility dataset. Please refresh the page.";

#[derive(Debug, Clone, PartialEq)]
enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

#[component]
pub fn Dashboard() -> Element {
    let mut raw_rows = use_signal(Vec::<RawRecord>::new);
    let mut phase = use_signal(|| LoadPhase::Loading);
    let mut criteria = use_signal(Criteria::default);

    // The load outlives the component on slow networks; the token lets the
    // finished load notice the page is gone and drop its result.
    let token = use_hook(LoadToken::new);
    {
        let token = token.clone();
        use_drop(move || token.cancel());
    }

    use_hook({
        let token = token.clone();
        move || {
            spawn(async move {
                match loader::load_dataset(loader::DATASET_PATH).await {
                    Ok(rows) => {
                        if token.is_cancelled() {
                            return;
                        }
                        raw_rows.set(rows);
                        phase.set(LoadPhase::Ready);
                    }
                    Err(err) => {
                        if token.is_cancelled() {
                            return;
                        }
                        if cfg!(debug_assertions) {
                            println!("dataset load failed: {err}");
                        }
                        phase.set(LoadPhase::Failed(LOAD_FAILURE_MESSAGE.to_string()));
                    }
                }
            });
        }
    });

    let dataset = use_memo(move || {
        raw_rows
            .read()
            .iter()
            .map(Record::from_raw)
            .collect::<Vec<Record>>()
    });
    let filtered = use_memo(move || criteria.read().apply(&dataset.read()));
    let options = use_memo(move || FilterOptions::from_dataset(&dataset.read()));
    let insight = use_memo(move || insights::compute(&dataset.read()));

    let on_filter_change = move |(field, selection): (FilterField, Selection)| {
        criteria.write().set(field, selection);
    };

    let phase_now = phase();
    let dataset_len = dataset.read().len();
    let filtered_records = filtered.read().clone();
    let filtered_len = filtered_records.len();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div {
                    h1 { "LoanScope" }
                    p {
                        "Interactive visualization of loan eligibility data. Explore how income, "
                        "education, credit history, and property location relate to loan approval "
                        "outcomes. Dataset from India (annual income in Indian Rupees, ₹)."
                    }
                }
                div { class: "data-badge",
                    span { "Source" }
                    a {
                        href: "https://www.kaggle.com/datasets/avineshprabhakaran/loan-eligibility-prediction",
                        target: "_blank",
                        rel: "noreferrer",
                        "Kaggle Loan Eligibility Prediction"
                    }
                }
            }

            match phase_now {
                LoadPhase::Loading => rsx! {
                    section { class: "app-state",
                        p { class: "loading", "Loading dataset..." }
                    }
                },
                LoadPhase::Failed(message) => rsx! {
                    section { class: "app-state error",
                        p { "{message}" }
                    }
                },
                LoadPhase::Ready => rsx! {
                    InsightSummary { insights: insight(), total_count: dataset_len }

                    section { class: "dashboard",
                        FilterPanel {
                            filters: criteria(),
                            options: options(),
                            total_records: filtered_len,
                            total_available: dataset_len,
                            on_filter_change,
                        }

                        if filtered_len == 0 {
                            div { class: "no-data",
                                p {
                                    "No records match the current filter selection. Try broadening "
                                    "your filters or resetting them to view the full dataset."
                                }
                            }
                        } else {
                            div { class: "charts-grid",
                                IncomeStatusChart { records: filtered_records.clone() }
                                EducationApprovalChart { records: filtered_records.clone() }
                                CreditHistoryChart { records: filtered_records.clone() }
                                PropertyAreaChart { records: filtered_records }
                            }
                        }
                    }
                },
            }

            footer { class: "app-footer",
                p {
                    "LoanScope — loan eligibility explorer"
                    br {}
                    span { class: "app-footer__note",
                        "All figures derive from the loaded dataset; nothing is recomputed server-side."
                    }
                }
            }
        }
    }
}
