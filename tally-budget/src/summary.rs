//! Monthly aggregation over categorized transactions.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

use tally_core::{Category, CategorizedTransaction};

/// Calendar (year, month) grouping key; displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Aggregates for a single month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthStats {
    /// Net signed total (income positive, expenses negative)
    pub total: f64,
    /// Number of transactions
    pub count: usize,
    /// Signed subtotal per category
    pub by_category: BTreeMap<Category, f64>,
}

impl MonthStats {
    /// Sum of positive category subtotals.
    pub fn income(&self) -> f64 {
        self.by_category.values().filter(|v| **v > 0.0).sum()
    }

    /// Spending as a positive number (negated sum of negative subtotals).
    pub fn spend(&self) -> f64 {
        -self
            .by_category
            .values()
            .filter(|v| **v < 0.0)
            .sum::<f64>()
    }
}

/// Per-month aggregates, iterated in chronological order.
#[derive(Debug, Clone, Default)]
pub struct MonthlySummary {
    months: BTreeMap<MonthKey, MonthStats>,
}

impl MonthlySummary {
    pub fn months(&self) -> impl Iterator<Item = (&MonthKey, &MonthStats)> {
        self.months.iter()
    }

    pub fn get(&self, key: &MonthKey) -> Option<&MonthStats> {
        self.months.get(key)
    }

    /// Chronologically last month, if any.
    pub fn latest(&self) -> Option<(&MonthKey, &MonthStats)> {
        self.months.last_key_value()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Group transactions by calendar month, accumulating net total, count,
/// and per-category subtotals.
///
/// Single pass in input order. Sums are plain `f64` accumulation, so only
/// numeric-tolerance equality is guaranteed across platforms, not exact
/// binary equality.
pub fn summarize(txns: &[CategorizedTransaction]) -> MonthlySummary {
    let mut months: BTreeMap<MonthKey, MonthStats> = BTreeMap::new();

    for txn in txns {
        let stats = months.entry(MonthKey::from(txn.date)).or_default();
        stats.total += txn.amount;
        stats.count += 1;
        *stats.by_category.entry(txn.category).or_insert(0.0) += txn.amount;
    }

    MonthlySummary { months }
}
