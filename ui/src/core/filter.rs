//! Filter criteria and predicate evaluation over the normalized dataset.
//!
//! Each of the five selectors is independently either the match-all sentinel
//! or a concrete value; a record passes when it satisfies every active
//! selector. Filtering never mutates the dataset and resetting every selector
//! restores the full dataset exactly.

use crate::core::record::Record;

/// Label used for (and parsed as) the match-all sentinel in option lists.
pub const MATCH_ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Interprets a raw option value from a host select control.
    pub fn from_option_value(value: &str) -> Self {
        if value == MATCH_ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// The value a host select control should show for this selection.
    pub fn option_value(&self) -> &str {
        match self {
            Selection::All => MATCH_ALL,
            Selection::Only(value) => value,
        }
    }
}

/// Names of the five independent selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    PropertyArea,
    Education,
    Gender,
    CreditHistory,
    LoanStatus,
}

/// The active set of per-field selectors narrowing the displayed dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub property_area: Selection,
    pub education: Selection,
    pub gender: Selection,
    pub credit_history: Selection,
    pub loan_status: Selection,
}

impl Criteria {
    /// Replaces one named selector, leaving the others untouched.
    pub fn set(&mut self, field: FilterField, selection: Selection) {
        match field {
            FilterField::PropertyArea => self.property_area = selection,
            FilterField::Education => self.education = selection,
            FilterField::Gender => self.gender = selection,
            FilterField::CreditHistory => self.credit_history = selection,
            FilterField::LoanStatus => self.loan_status = selection,
        }
    }

    pub fn get(&self, field: FilterField) -> &Selection {
        match field {
            FilterField::PropertyArea => &self.property_area,
            FilterField::Education => &self.education,
            FilterField::Gender => &self.gender,
            FilterField::CreditHistory => &self.credit_history,
            FilterField::LoanStatus => &self.loan_status,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Logical AND across the active selectors.
    pub fn matches(&self, record: &Record) -> bool {
        if let Selection::Only(area) = &self.property_area {
            if record.property_area != *area {
                return false;
            }
        }

        if let Selection::Only(education) = &self.education {
            if record.education != *education {
                return false;
            }
        }

        if let Selection::Only(gender) = &self.gender {
            if record.gender != *gender {
                return false;
            }
        }

        if let Selection::Only(choice) = &self.credit_history {
            // The criterion arrives as text; compare numerically. A record
            // with absent credit history never matches a concrete choice.
            match (choice.parse::<f64>(), record.credit_history) {
                (Ok(wanted), Some(actual)) if actual == wanted => {}
                _ => return false,
            }
        }

        if let Selection::Only(status) = &self.loan_status {
            let code = match status.as_str() {
                "Approved" => "Y",
                "Rejected" => "N",
                _ => return false,
            };
            if record.loan_status != code {
                return false;
            }
        }

        true
    }

    /// Produces the ordered subsequence of records satisfying every active
    /// selector; the input is untouched.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Option lists for the host filter controls, each prefixed with [`MATCH_ALL`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub property_areas: Vec<String>,
    pub educations: Vec<String>,
    pub genders: Vec<String>,
    pub credit_histories: Vec<String>,
    pub loan_statuses: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(records: &[Record]) -> Self {
        Self {
            property_areas: distinct_options(records, |r| &r.property_area),
            educations: distinct_options(records, |r| &r.education),
            genders: distinct_options(records, |r| &r.gender),
            credit_histories: fixed_options(&["1", "0"]),
            loan_statuses: fixed_options(&["Approved", "Rejected"]),
        }
    }
}

fn distinct_options(records: &[Record], key: impl Fn(&Record) -> &str) -> Vec<String> {
    let mut options = vec![MATCH_ALL.to_string()];
    for record in records {
        let value = key(record);
        if !value.is_empty() && !options.iter().any(|known| known == value) {
            options.push(value.to_string());
        }
    }
    options
}

fn fixed_options(values: &[&str]) -> Vec<String> {
    let mut options = vec![MATCH_ALL.to_string()];
    options.extend(values.iter().map(|value| value.to_string()));
    options
}
