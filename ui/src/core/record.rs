//! Raw and normalized applicant records.
//!
//! The source table arrives as untyped text rows ([`RawRecord`]). Normalization
//! coerces the five numeric columns, trims the categorical columns, and derives
//! the combined household income. "Absent" is a first-class state for numeric
//! fields: a missing, empty, or unparseable value becomes `None`, never zero.

use serde::Deserialize;

/// One row of the source table, addressed by exact header name.
///
/// Every field is optional text; the normalizer decides what each one means.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Customer_ID", default)]
    pub customer_id: Option<String>,
    #[serde(rename = "Applicant_Income", default)]
    pub applicant_income: Option<String>,
    #[serde(rename = "Coapplicant_Income", default)]
    pub coapplicant_income: Option<String>,
    #[serde(rename = "Loan_Amount", default)]
    pub loan_amount: Option<String>,
    #[serde(rename = "Loan_Amount_Term", default)]
    pub loan_term: Option<String>,
    #[serde(rename = "Credit_History", default)]
    pub credit_history: Option<String>,
    #[serde(rename = "Dependents", default)]
    pub dependents: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Married", default)]
    pub married: Option<String>,
    #[serde(rename = "Education", default)]
    pub education: Option<String>,
    #[serde(rename = "Self_Employed", default)]
    pub self_employed: Option<String>,
    #[serde(rename = "Property_Area", default)]
    pub property_area: Option<String>,
    #[serde(rename = "Loan_Status", default)]
    pub loan_status: Option<String>,
}

/// A type-coerced, trimmed applicant row with derived total income.
///
/// Created once at load time and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub id: String,
    pub applicant_income: Option<f64>,
    pub coapplicant_income: Option<f64>,
    pub loan_amount: Option<f64>,
    pub loan_term: Option<f64>,
    pub credit_history: Option<f64>,
    pub dependents: String,
    pub gender: String,
    pub married: String,
    pub education: String,
    pub self_employed: String,
    pub property_area: String,
    /// "Y", "N", or "" (present in the raw data as a real state).
    pub loan_status: String,
    /// Sum of the income fields that are actually numeric; 0.0 if both absent.
    pub total_income: f64,
}

impl Record {
    pub fn from_raw(raw: &RawRecord) -> Self {
        let applicant_income = coerce_numeric(raw.applicant_income.as_deref());
        let coapplicant_income = coerce_numeric(raw.coapplicant_income.as_deref());

        Self {
            id: coerce_category(raw.customer_id.as_deref()),
            applicant_income,
            coapplicant_income,
            loan_amount: coerce_numeric(raw.loan_amount.as_deref()),
            loan_term: coerce_numeric(raw.loan_term.as_deref()),
            credit_history: coerce_numeric(raw.credit_history.as_deref()),
            dependents: coerce_category(raw.dependents.as_deref()),
            gender: coerce_category(raw.gender.as_deref()),
            married: coerce_category(raw.married.as_deref()),
            education: coerce_category(raw.education.as_deref()),
            self_employed: coerce_category(raw.self_employed.as_deref()),
            property_area: coerce_category(raw.property_area.as_deref()),
            loan_status: coerce_category(raw.loan_status.as_deref()),
            total_income: total_income(applicant_income, coapplicant_income),
        }
    }
}

/// Missing, empty, unparseable, or non-finite input yields `None`.
pub fn coerce_numeric(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Missing input yields the empty string; otherwise trimmed text.
pub fn coerce_category(raw: Option<&str>) -> String {
    raw.map(|value| value.trim().to_string()).unwrap_or_default()
}

/// Sum of the present income operands. Both absent yields 0.0.
pub fn total_income(applicant: Option<f64>, coapplicant: Option<f64>) -> f64 {
    applicant.into_iter().chain(coapplicant).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(applicant: &str, coapplicant: &str) -> RawRecord {
        RawRecord {
            customer_id: Some("LP001".into()),
            applicant_income: Some(applicant.into()),
            coapplicant_income: Some(coapplicant.into()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn numeric_coercion_handles_absent_and_garbage() {
        assert_eq!(coerce_numeric(None), None);
        assert_eq!(coerce_numeric(Some("")), None);
        assert_eq!(coerce_numeric(Some("   ")), None);
        assert_eq!(coerce_numeric(Some("abc")), None);
        assert_eq!(coerce_numeric(Some("inf")), None);
        assert_eq!(coerce_numeric(Some("4583")), Some(4583.0));
        assert_eq!(coerce_numeric(Some(" 120.5 ")), Some(120.5));
    }

    #[test]
    fn categorical_coercion_trims_and_defaults() {
        assert_eq!(coerce_category(None), "");
        assert_eq!(coerce_category(Some("  Urban ")), "Urban");
    }

    #[test]
    fn total_income_sums_present_operands_only() {
        assert_eq!(total_income(Some(4000.0), Some(1500.0)), 5500.0);
        assert_eq!(total_income(Some(4000.0), None), 4000.0);
        assert_eq!(total_income(None, Some(1500.0)), 1500.0);
        assert_eq!(total_income(None, None), 0.0);
    }

    #[test]
    fn parse_failure_degrades_one_field_without_aborting_the_record() {
        let record = Record::from_raw(&raw("not-a-number", "2100"));
        assert_eq!(record.applicant_income, None);
        assert_eq!(record.coapplicant_income, Some(2100.0));
        assert_eq!(record.total_income, 2100.0);
    }

    #[test]
    fn normalization_is_idempotent() {
        let record = Record::from_raw(&raw(" 5849 ", ""));

        // Re-apply the same coercions to the already-normalized values.
        let income_text = record.applicant_income.map(|v| v.to_string());
        assert_eq!(
            coerce_numeric(income_text.as_deref()),
            record.applicant_income
        );
        assert_eq!(
            coerce_category(Some(&record.property_area)),
            record.property_area
        );
        assert_eq!(
            total_income(record.applicant_income, record.coapplicant_income),
            record.total_income
        );
    }
}
