use crate::error::ServiceError;
use common::model::account::Account;
use rusqlite::Connection;

/// Every employee, ordered by name. Feeds the form picker and the import template.
pub fn list(conn: &Connection) -> Result<Vec<Account>, ServiceError> {
    let mut stmt =
        conn.prepare("SELECT id, full_name, internal_nik FROM accounts ORDER BY full_name, id")?;
    let accounts = stmt
        .query_map([], |row| {
            Ok(Account {
                id: row.get(0)?,
                full_name: row.get(1)?,
                internal_nik: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(accounts)
}

#[cfg(test)]
pub(crate) fn insert(conn: &Connection, id: &str, full_name: &str, nik: Option<&str>) {
    conn.execute(
        "INSERT INTO accounts (id, full_name, internal_nik) VALUES (?1, ?2, ?3)",
        rusqlite::params![id, full_name, nik],
    )
    .unwrap();
}
