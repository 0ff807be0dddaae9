//! Transaction record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single financial transaction parsed from a statement row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Date of the transaction (calendar date, no time component)
    pub date: NaiveDate,
    /// Human-readable description
    pub description: String,
    /// Positive = income, negative = expense
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }
}

/// A transaction plus its derived category; immutable once built
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorizedTransaction {
    pub date: NaiveDate,
    pub description: String,
    /// Positive = income, negative = expense
    pub amount: f64,
    /// Deterministic category derived from the description
    pub category: Category,
}

impl CategorizedTransaction {
    pub fn new(txn: Transaction, category: Category) -> Self {
        Self {
            date: txn.date,
            description: txn.description,
            amount: txn.amount,
            category,
        }
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}
