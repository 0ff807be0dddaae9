//! Keyword-based categorization rules (rules as data).
//!
//! Rules evaluate in the order they appear in [`RULES`]; the first rule
//! with a substring match wins. Coffee is checked before Shopping so a
//! description like "Amazon coffee pods" still lands on Coffee.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transaction::{CategorizedTransaction, Transaction};

/// Transaction categories matched deterministically
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Category {
    #[serde(rename = "coffee")]
    Coffee,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "groceries")]
    Groceries,
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "housing")]
    Housing,
    #[serde(rename = "subscriptions")]
    Subscriptions,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "uncategorized")]
    Uncategorized,
}

impl Category {
    /// Display label for reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::Transport => "Transport",
            Category::Groceries => "Groceries",
            Category::Income => "Income",
            Category::Housing => "Housing",
            Category::Subscriptions => "Subscriptions",
            Category::Shopping => "Shopping",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered rule table: first matching rule wins.
///
/// Keywords are matched as lower-case substrings of the description.
pub const RULES: &[(Category, &[&str])] = &[
    (Category::Coffee, &["starbucks", "coffee"]),
    (Category::Transport, &["uber", "lyft"]),
    (Category::Groceries, &["walmart", "supermarket", "grocery"]),
    (Category::Income, &["salary", "payroll", "paycheck"]),
    (Category::Housing, &["rent", "mortgage"]),
    (Category::Subscriptions, &["subscription", "netflix", "spotify"]),
    (Category::Shopping, &["amazon"]),
];

/// Categorize a description against [`RULES`].
///
/// Pure function of the description text; returns
/// [`Category::Uncategorized`] when no keyword matches.
pub fn categorize(description: &str) -> Category {
    let desc = description.to_lowercase();
    for (category, keywords) in RULES {
        if keywords.iter().any(|kw| desc.contains(kw)) {
            return *category;
        }
    }
    Category::Uncategorized
}

/// Categorize a whole batch, preserving input order.
pub fn categorize_transactions(txns: Vec<Transaction>) -> Vec<CategorizedTransaction> {
    txns.into_iter()
        .map(|txn| {
            let category = categorize(&txn.description);
            CategorizedTransaction::new(txn, category)
        })
        .collect()
}
