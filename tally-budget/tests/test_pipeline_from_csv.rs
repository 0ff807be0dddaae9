use chrono::NaiveDate;
use std::path::PathBuf;

use tally_budget::{MonthKey, recommend, summarize};
use tally_core::{Category, categorize_transactions};
use tally_ingest::{ParsePolicy, parse_transactions_csv};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("sample.csv")
}

/// Full-pipeline regression over the repo's sample statement.
#[test]
fn test_pipeline_totals_from_sample() {
    let txns = parse_transactions_csv(sample_path(), ParsePolicy::Strict).unwrap();
    assert_eq!(txns.len(), 15);

    // The DD-MM-YYYY row lands on September 15 with its commas stripped.
    let payday = txns
        .iter()
        .find(|t| t.date == NaiveDate::from_ymd_opt(2025, 9, 15).unwrap())
        .unwrap();
    assert_eq!(payday.amount, 2400.00);

    let summary = summarize(&categorize_transactions(txns));
    assert_eq!(summary.len(), 2);

    let august = summary.get(&MonthKey::new(2025, 8)).unwrap();
    assert_eq!(august.count, 8);
    assert!((august.total - 1251.02).abs() < 1e-6, "august: {}", august.total);

    let september = summary.get(&MonthKey::new(2025, 9)).unwrap();
    assert_eq!(september.count, 7);
    assert!(
        (september.total - 1272.56).abs() < 1e-6,
        "september: {}",
        september.total
    );
    assert_eq!(september.by_category[&Category::Income], 2400.00);
    assert_eq!(september.by_category[&Category::Housing], -950.00);
    assert_eq!(september.by_category[&Category::Uncategorized], -60.00);
}

#[test]
fn test_pipeline_subtotals_match_totals() {
    let txns = parse_transactions_csv(sample_path(), ParsePolicy::Strict).unwrap();
    let summary = summarize(&categorize_transactions(txns));

    for (month, stats) in summary.months() {
        let sum: f64 = stats.by_category.values().sum();
        assert!(
            (sum - stats.total).abs() < 1e-6,
            "{month}: category sum {sum} != total {}",
            stats.total
        );
    }
}

#[test]
fn test_pipeline_recommendations_from_sample() {
    let txns = parse_transactions_csv(sample_path(), ParsePolicy::Strict).unwrap();
    let summary = summarize(&categorize_transactions(txns));

    // September spend is $1127.44, dominated by the mortgage payment.
    let lines = recommend(&summary, Some(0.5));
    assert!(lines[0].contains("Housing"), "line: {}", lines[0]);
    assert!(lines[0].contains("$190.00"), "line: {}", lines[0]);
    // Savings rate 1 - 1127.44/2400 ~= 0.53 meets the 0.5 target.
    assert!(
        lines
            .iter()
            .any(|l| l.contains("meeting or exceeding your savings target")),
        "lines: {lines:?}"
    );
}

/// Lenient parsing keeps the good rows of a statement with junk in it.
#[test]
fn test_lenient_pipeline_with_bad_rows() {
    let csv = "\
date,description,amount
2025-09-01,Starbucks,-4.50
2025/09/02,Slash Date,-1.00
2025-09-15,Paycheck,not-a-number
2025-09-20,Rent,-300.00
";
    let txns =
        tally_ingest::parse_transactions_reader(csv.as_bytes(), ParsePolicy::Lenient).unwrap();
    assert_eq!(txns.len(), 2);

    let summary = summarize(&categorize_transactions(txns));
    let stats = summary.get(&MonthKey::new(2025, 9)).unwrap();
    assert_eq!(stats.count, 2);
    assert!((stats.total + 304.50).abs() < 1e-9);
}
