//! Queries against `account_certifications`, joined to `accounts` for display.

use crate::error::ServiceError;
use common::model::account::AccountRef;
use common::model::certification::{Certification, CertificationDraft};
use common::sanitize::UPDATABLE_FIELDS;
use common::spreadsheet::parse_iso_date;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use serde_json::{Map, Value};

const SELECT_JOINED: &str = "
    SELECT c.id, c.account_id, c.entry_date, c.cert_type, c.cert_name, c.cert_date,
           c.file_id, c.notes, a.full_name, a.internal_nik
    FROM account_certifications c
    LEFT JOIN accounts a ON a.id = c.account_id";

const DATE_COLUMNS: [&str; 2] = ["entry_date", "cert_date"];

fn from_row(row: &Row<'_>) -> rusqlite::Result<Certification> {
    let full_name: Option<String> = row.get(8)?;
    let internal_nik: Option<String> = row.get(9)?;
    let joined = full_name.is_some() || internal_nik.is_some();
    Ok(Certification {
        id: row.get(0)?,
        account_id: row.get(1)?,
        entry_date: row.get(2)?,
        cert_type: row.get(3)?,
        cert_name: row.get(4)?,
        cert_date: row.get(5)?,
        file_id: row.get(6)?,
        notes: row.get(7)?,
        account: joined.then_some(AccountRef {
            full_name,
            internal_nik,
        }),
    })
}

/// All records, newest entries first; ties broken by certification date.
pub fn list(conn: &Connection) -> Result<Vec<Certification>, ServiceError> {
    let sql = format!(
        "{} ORDER BY c.entry_date DESC, c.cert_date DESC, c.rowid DESC",
        SELECT_JOINED
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Records of one employee, most recent certification first.
pub fn list_for_account(
    conn: &Connection,
    account_id: &str,
) -> Result<Vec<Certification>, ServiceError> {
    let sql = format!(
        "{} WHERE c.account_id = ?1 ORDER BY c.cert_date DESC, c.rowid DESC",
        SELECT_JOINED
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![account_id], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn get(conn: &Connection, id: &str) -> Result<Option<Certification>, ServiceError> {
    let sql = format!("{} WHERE c.id = ?1", SELECT_JOINED);
    Ok(conn.query_row(&sql, params![id], from_row).optional()?)
}

/// Raw category column, one entry per record. Deduplication happens in the caller.
pub fn cert_types(conn: &Connection) -> Result<Vec<Option<String>>, ServiceError> {
    let mut stmt = conn.prepare("SELECT cert_type FROM account_certifications")?;
    let types = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(types)
}

pub fn insert(
    conn: &Connection,
    id: &str,
    draft: &CertificationDraft,
) -> Result<(), ServiceError> {
    conn.execute(
        "INSERT INTO account_certifications
            (id, account_id, entry_date, cert_type, cert_name, cert_date, file_id, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            draft.account_id,
            draft.entry_date,
            draft.cert_type,
            draft.cert_name,
            draft.cert_date,
            draft.file_id,
            draft.notes,
        ],
    )?;
    Ok(())
}

/// Applies the updatable columns present in `changes`. Returns the number of rows
/// touched, so `0` means the id does not exist. Column names come from
/// `UPDATABLE_FIELDS`, never from the payload.
pub fn update(
    conn: &Connection,
    id: &str,
    changes: &Map<String, Value>,
) -> Result<usize, ServiceError> {
    let mut assignments = Vec::new();
    let mut values = Vec::new();
    for column in UPDATABLE_FIELDS {
        if let Some(value) = changes.get(column) {
            values.push(column_value(column, value)?);
            assignments.push(format!("{} = ?{}", column, values.len()));
        }
    }
    if assignments.is_empty() {
        return Ok(0);
    }

    values.push(SqlValue::Text(id.to_string()));
    let sql = format!(
        "UPDATE account_certifications SET {} WHERE id = ?{}",
        assignments.join(", "),
        values.len()
    );
    Ok(conn.execute(&sql, params_from_iter(values))?)
}

pub fn delete(conn: &Connection, id: &str) -> Result<usize, ServiceError> {
    Ok(conn.execute(
        "DELETE FROM account_certifications WHERE id = ?1",
        params![id],
    )?)
}

fn column_value(column: &str, value: &Value) -> Result<SqlValue, ServiceError> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::String(s) if DATE_COLUMNS.contains(&column) => parse_iso_date(s)
            .map(|d| SqlValue::Text(d.format("%Y-%m-%d").to_string()))
            .ok_or_else(|| {
                ServiceError::Validation(format!("{} must be a YYYY-MM-DD date", column))
            }),
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        _ => Err(ServiceError::Validation(format!(
            "{} must be a string or null",
            column
        ))),
    }
}
