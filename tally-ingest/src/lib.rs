//! tally-ingest: CSV statement ingestion into typed transactions.

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{ParsePolicy, parse_transactions_csv, parse_transactions_reader};
