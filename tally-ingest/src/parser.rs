//! Transactions CSV parser.
//!
//! Expected input:
//!   date,description,amount
//!   2025-09-01,Starbucks,-4.50
//!   15-09-2025,ACME Corp Payroll,"2,400.00"
//!
//! Dates are accepted as YYYY-MM-DD, then DD-MM-YYYY, then MM-DD-YYYY
//! (tried in that order), with an ISO-8601 datetime fallback. Amounts may
//! carry thousands-separator commas.

use chrono::{NaiveDate, NaiveDateTime};
use std::io;
use std::path::Path;
use tracing::warn;

use tally_core::Transaction;

use crate::error::ParseError;

/// Run-wide handling of rows that fail date or amount parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Abort the run on the first malformed row.
    #[default]
    Strict,
    /// Warn and skip malformed rows; well-formed rows are kept.
    Lenient,
}

/// Accepted date formats, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%m-%d-%Y"];

/// Required header columns (compared case-insensitively).
const EXPECTED_HEADER: [&str; 3] = ["date", "description", "amount"];

/// Parse a transactions CSV file, returning rows in input order.
pub fn parse_transactions_csv(
    path: impl AsRef<Path>,
    policy: ParsePolicy,
) -> Result<Vec<Transaction>, ParseError> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path.as_ref())?;
    read_transactions(rdr, policy)
}

/// Parse transactions CSV from any reader (used by tests and piped input).
pub fn parse_transactions_reader<R: io::Read>(
    reader: R,
    policy: ParsePolicy,
) -> Result<Vec<Transaction>, ParseError> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);
    read_transactions(rdr, policy)
}

fn read_transactions<R: io::Read>(
    mut rdr: csv::Reader<R>,
    policy: ParsePolicy,
) -> Result<Vec<Transaction>, ParseError> {
    let headers = rdr.headers()?.clone();
    check_header(&headers)?;

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let line = i + 2; // 1-indexed, after the header row
        let record = result?;
        match parse_record(&record, line) {
            Ok(txn) => out.push(txn),
            Err(err) if policy == ParsePolicy::Lenient && err.is_row_error() => {
                warn!(line, error = %err, "skipping malformed row");
            }
            Err(err) => return Err(err),
        }
    }

    if out.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(out)
}

fn check_header(headers: &csv::StringRecord) -> Result<(), ParseError> {
    let ok = headers.len() == EXPECTED_HEADER.len()
        && headers
            .iter()
            .zip(EXPECTED_HEADER)
            .all(|(got, want)| got.trim().eq_ignore_ascii_case(want));

    if ok {
        Ok(())
    } else {
        Err(ParseError::Header {
            found: headers.iter().collect::<Vec<_>>().join(","),
        })
    }
}

fn parse_record(record: &csv::StringRecord, line: usize) -> Result<Transaction, ParseError> {
    let date_raw = record.get(0).unwrap_or("").trim();
    let date = parse_flexible_date(date_raw).ok_or_else(|| ParseError::MalformedDate {
        value: date_raw.to_string(),
        line,
    })?;

    let description = record.get(1).unwrap_or("").trim().to_string();

    let amount_raw = record.get(2).unwrap_or("").trim();
    let amount = parse_amount(amount_raw).ok_or_else(|| ParseError::MalformedAmount {
        value: amount_raw.to_string(),
        line,
    })?;

    Ok(Transaction {
        date,
        description,
        amount,
    })
}

/// Try the accepted formats in order, then ISO-8601 datetime.
fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    s.parse::<NaiveDateTime>().ok().map(|dt| dt.date())
}

/// Strip thousands-separator commas and parse; non-finite values are
/// rejected.
fn parse_amount(s: &str) -> Option<f64> {
    let cleaned = s.replace(',', "");
    let value: f64 = cleaned.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
