//! Input normalization for spreadsheet-sourced cells.
//!
//! The four input tables come out of spreadsheet extracts, so identifiers
//! arrive with float artifacts (a numeric-looking id rendered `"12345.0"`),
//! payroll contract names carry a fixed `"Contr-"` prefix, and dates and
//! amounts may be strings, numbers, or garbage. This module cleans each of
//! those shapes into the canonical values the rest of the engine matches on.
//!
//! All functions here are pure: they return cleaned copies and never mutate
//! or reject their input. Unparseable dates and amounts become `None`, never
//! an error.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;
use std::str::FromStr;

/// Date formats accepted by the tolerant date parser, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Datetime formats accepted by the tolerant date parser (date part is kept).
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Normalizes a contract identifier for cross-table matching.
///
/// Strips everything from the first decimal point onward, then trims
/// surrounding whitespace. Falls back silently to the trimmed original when
/// no decimal point is present. Idempotent: normalizing an already-normalized
/// id is a no-op.
///
/// # Examples
///
/// ```
/// use contract_audit::normalize::normalize_contract_id;
///
/// assert_eq!(normalize_contract_id("12345.0"), "12345");
/// assert_eq!(normalize_contract_id("  A100  "), "A100");
/// assert_eq!(normalize_contract_id("A100"), "A100");
/// ```
pub fn normalize_contract_id(raw: &str) -> String {
    let before_decimal = match raw.split_once('.') {
        Some((head, _)) => head,
        None => raw,
    };
    before_decimal.trim().to_string()
}

/// Strips the payroll contract-name prefix, then normalizes the remainder
/// as a contract id.
///
/// Payroll extracts render contract names as `"Contr-<id>"`; the prefix is
/// removed when present and the rest goes through [`normalize_contract_id`]
/// so payroll names compare equal to audit-table ids.
///
/// # Examples
///
/// ```
/// use contract_audit::normalize::strip_payroll_prefix;
///
/// assert_eq!(strip_payroll_prefix("Contr-A100", "Contr-"), "A100");
/// assert_eq!(strip_payroll_prefix("A100", "Contr-"), "A100");
/// ```
pub fn strip_payroll_prefix(raw: &str, prefix: &str) -> String {
    let stripped = raw.trim().strip_prefix(prefix).unwrap_or(raw);
    normalize_contract_id(stripped)
}

/// Renders a spreadsheet cell as a trimmed string.
///
/// Numbers keep their textual rendering (so a float-artifact id like
/// `12345.0` survives long enough for [`normalize_contract_id`] to strip
/// it); null and non-scalar values become the empty string.
pub fn coerce_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerces a spreadsheet cell into a monetary amount.
///
/// Accepts JSON numbers and numeric strings (thousands separators are
/// tolerated). Anything else, including the empty string, is `None`.
///
/// # Examples
///
/// ```
/// use contract_audit::normalize::coerce_amount;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// assert_eq!(coerce_amount(&json!(1500)), Some(Decimal::new(1500, 0)));
/// assert_eq!(coerce_amount(&json!("1,500.50")), Some(Decimal::new(150050, 2)));
/// assert_eq!(coerce_amount(&json!("N/A")), None);
/// ```
pub fn coerce_amount(cell: &Value) -> Option<Decimal> {
    match cell {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
        Value::String(s) => {
            let cleaned = s.trim().replace(',', "");
            if cleaned.is_empty() {
                return None;
            }
            Decimal::from_str(&cleaned).ok()
        }
        _ => None,
    }
}

/// Coerces a spreadsheet cell into a calendar date.
///
/// Delegates string cells to [`parse_date`]; every other cell shape is
/// `None`. An absent date is an explicit "no date" marker downstream, never
/// a fault.
pub fn coerce_date(cell: &Value) -> Option<NaiveDate> {
    match cell {
        Value::String(s) => parse_date(s),
        _ => None,
    }
}

/// Tolerant date parser for spreadsheet-rendered dates.
///
/// Tries ISO dates, day-first formats, and datetime renderings (keeping the
/// date part). Returns `None` for anything it cannot parse.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use contract_audit::normalize::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 3, 15);
/// assert_eq!(parse_date("2026-03-15"), expected);
/// assert_eq!(parse_date("2026-03-15 00:00:00"), expected);
/// assert_eq!(parse_date("15/03/2026"), expected);
/// assert_eq!(parse_date("not a date"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}
