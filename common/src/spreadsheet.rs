//! Spreadsheet conventions shared by template generation and upload parsing.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

pub const SHEET_NAME: &str = "Certifications";

pub const COL_ACCOUNT_ID: &str = "Account ID";
pub const COL_NIK: &str = "NIK";
pub const COL_NAME: &str = "Name";
pub const COL_TYPE: &str = "Type";
pub const COL_CERT_NAME: &str = "Cert Name";
pub const COL_CERT_DATE: &str = "Cert Date (YYYY-MM-DD)";
pub const COL_NOTES: &str = "Notes";
pub const COL_DRIVE_LINK: &str = "Drive Link";

/// Header prefix that identifies the certification date column.
pub const CERT_DATE_PREFIX: &str = "Cert Date";

/// Template header row, in column order.
pub const TEMPLATE_HEADERS: [&str; 8] = [
    COL_ACCOUNT_ID,
    COL_NIK,
    COL_NAME,
    COL_TYPE,
    COL_CERT_NAME,
    COL_CERT_DATE,
    COL_NOTES,
    COL_DRIVE_LINK,
];

/// Serial number of 1970-01-01 in the 1900 date system (day 0 is 1899-12-30).
const UNIX_EPOCH_SERIAL: f64 = 25_569.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

static DRIVE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\w]{25,}").expect("drive id pattern"));

/// Download name of the import template generated on `date`.
pub fn template_file_name(date: NaiveDate) -> String {
    format!("HUREMA_Certification_Template_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Converts a spreadsheet serial date (1900 date system) to a calendar date.
///
/// The fractional part is the time of day and is dropped once the value has been
/// scaled to seconds since the Unix epoch.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let seconds = ((serial - UNIX_EPOCH_SERIAL) * SECONDS_PER_DAY).round();
    if seconds.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(seconds as i64, 0).map(|dt| dt.date_naive())
}

/// Parses `YYYY-MM-DD`, also accepting an ISO datetime whose date part is first.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let (date_part, rest) = match (text.get(..10), text.get(10..)) {
        (Some(date), Some(rest)) => (date, rest),
        _ => (text, ""),
    };
    if !rest.is_empty() && !rest.starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Pulls the opaque file id (a run of 25 or more word or hyphen characters) out
/// of a drive share link.
pub fn extract_drive_file_id(link: &str) -> Option<String> {
    DRIVE_ID_RE.find(link).map(|m| m.as_str().to_string())
}

/// Whether `candidate` is a bare drive file id.
pub fn is_drive_file_id(candidate: &str) -> bool {
    extract_drive_file_id(candidate).is_some_and(|id| id == candidate)
}
