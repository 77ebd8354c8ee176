//! End-to-end pipeline checks: CSV text through normalization, filtering,
//! aggregation, binning and stacking, asserting the cross-stage invariants
//! the dashboard relies on.

use ui::core::aggregate;
use ui::core::binning;
use ui::core::filter::{Criteria, FilterField, Selection};
use ui::core::insights;
use ui::core::loader;
use ui::core::record::Record;
use ui::core::stack;

const SAMPLE_CSV: &str = "\
Customer_ID,Gender,Married,Dependents,Education,Self_Employed,Applicant_Income,Coapplicant_Income,Loan_Amount,Loan_Amount_Term,Credit_History,Property_Area,Loan_Status
LP001002,Male,No,0,Graduate,No,5849,,146,360,1,Urban,Y
LP001003,Male,Yes,1,Graduate,No,4583,1508,128,360,1,Rural,N
LP001005,Male,Yes,0,Graduate,Yes,3000,,66,360,1,Urban,Y
LP001006,Male,Yes,0,Not Graduate,No,2583,2358,120,360,abc,Urban,Y
LP001008,Female,No,0,Graduate,No,6000,,141,360,0,Semiurban,N
LP001011,Male,Yes,2,Graduate,Yes,5417,4196,267,360,1,Urban,Y
LP001013,Male,Yes,0,Not Graduate,No,2333,1516,95,360,1,Rural,
LP001014,Female,Yes,3+,Graduate,No,3036,2504,158,360,0,Semiurban,N
";

fn load_sample() -> Vec<Record> {
    let rows = loader::parse_rows(SAMPLE_CSV).expect("sample parses");
    rows.iter().map(Record::from_raw).collect()
}

#[test]
fn normalization_is_idempotent_in_effect() {
    let dataset = load_sample();
    // Re-deriving total income from the already-coerced operands gives the
    // identical value.
    for record in &dataset {
        let again = ui::core::record::total_income(record.applicant_income, record.coapplicant_income);
        assert_eq!(record.total_income, again);
    }
}

#[test]
fn unparseable_numerics_degrade_to_absent_not_failure() {
    let dataset = load_sample();
    let odd = dataset
        .iter()
        .find(|r| r.id == "LP001006")
        .expect("row present");
    assert_eq!(odd.credit_history, None);
    // The rest of the row survives.
    assert_eq!(odd.education, "Not Graduate");
    assert!(odd.total_income > 0.0);
}

#[test]
fn total_income_sums_only_numeric_operands() {
    let dataset = load_sample();
    let solo = dataset
        .iter()
        .find(|r| r.id == "LP001002")
        .unwrap();
    assert_eq!(solo.total_income, 5849.0);

    let joint = dataset
        .iter()
        .find(|r| r.id == "LP001003")
        .unwrap();
    assert_eq!(joint.total_income, 4583.0 + 1508.0);
}

#[test]
fn filter_narrowing_is_monotone_and_reset_restores_everything() {
    let dataset = load_sample();
    let mut criteria = Criteria::default();
    let full = criteria.apply(&dataset);
    assert_eq!(full.len(), dataset.len());

    criteria.set(FilterField::PropertyArea, Selection::Only("Urban".into()));
    let urban = criteria.apply(&dataset);
    assert!(urban.len() <= full.len());
    assert!(urban.iter().all(|r| r.property_area == "Urban"));

    criteria.set(FilterField::LoanStatus, Selection::Only("Approved".into()));
    let urban_approved = criteria.apply(&dataset);
    assert!(urban_approved.len() <= urban.len());
    assert!(urban_approved.iter().all(|r| r.loan_status == "Y"));

    criteria.reset();
    assert_eq!(criteria.apply(&dataset), dataset);
}

#[test]
fn records_with_blank_status_count_in_denominators_only() {
    let dataset = load_sample();
    let groups = aggregate::group_by_category(&dataset, |r| &r.property_area);
    let rural = groups.iter().find(|g| g.key == "Rural").unwrap();

    // LP001003 rejected, LP001013 blank status.
    assert_eq!(rural.total, 2);
    assert_eq!(rural.approved, 0);
    assert_eq!(rural.rejected, 1);
    assert_eq!(rural.approval_rate, 0.0);
}

#[test]
fn aggregation_totals_reconcile_with_single_field_filters() {
    let dataset = load_sample();
    let groups = aggregate::group_by_category(&dataset, |r| &r.education);
    let grand_total: usize = groups.iter().map(|g| g.total).sum();
    assert_eq!(grand_total, dataset.len());

    for group in &groups {
        let mut criteria = Criteria::default();
        criteria.set(FilterField::Education, Selection::Only(group.key.clone()));
        assert_eq!(criteria.apply(&dataset).len(), group.total);
    }
}

#[test]
fn income_bins_cover_every_positive_income_exactly_once() {
    let dataset = load_sample();
    let bins = binning::bin_by_total_income(&dataset);

    let positive = dataset.iter().filter(|r| r.total_income > 0.0).count();
    let binned: usize = bins.iter().map(|b| b.total).sum();
    assert_eq!(binned, positive);

    // Lower-inclusive membership: each income lands in exactly one bin.
    for record in dataset.iter().filter(|r| r.total_income > 0.0) {
        let hits = bins
            .iter()
            .filter(|b| record.total_income >= b.lower && record.total_income < b.upper)
            .count();
        assert_eq!(hits, 1, "income {} not in exactly one bin", record.total_income);
    }
}

#[test]
fn stacked_segments_are_contiguous_and_sum_to_the_bin_total() {
    let dataset = load_sample();
    for bin in binning::bin_by_total_income(&dataset) {
        let [approved, rejected] = stack::stack_pair(bin.approved, bin.rejected);
        assert_eq!(approved.start, 0.0);
        assert_eq!(approved.end, rejected.start);
        assert_eq!(rejected.end, (bin.approved + bin.rejected) as f64);
    }
}

#[test]
fn insights_match_direct_computation() {
    let dataset = load_sample();
    let metrics = insights::compute(&dataset).expect("non-empty dataset");

    let approved = dataset.iter().filter(|r| r.loan_status == "Y").count();
    let expected_rate = approved as f64 / dataset.len() as f64 * 100.0;
    assert!((metrics.approval_rate_pct - expected_rate).abs() < 1e-9);

    assert!(metrics.avg_income > 0.0);
    assert!(!metrics.property_impact.is_empty());
    // Sorted best-first.
    for pair in metrics.property_impact.windows(2) {
        assert!(pair[0].approval_rate >= pair[1].approval_rate);
    }
}

#[test]
fn empty_dataset_yields_no_insights_and_no_bins() {
    let empty: Vec<Record> = Vec::new();
    assert!(insights::compute(&empty).is_none());
    assert!(binning::bin_by_total_income(&empty).is_empty());
}
