//! tally-core: transaction domain types and keyword categorization rules

pub mod category;
pub mod transaction;

pub use category::{Category, RULES, categorize, categorize_transactions};
pub use transaction::{CategorizedTransaction, Transaction};
