use rusqlite::Connection;

/// `accounts` belongs to the wider HR system; it is created here only so a fresh
/// database is usable.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS accounts (
    id           TEXT PRIMARY KEY,
    full_name    TEXT NOT NULL,
    internal_nik TEXT
);

CREATE TABLE IF NOT EXISTS account_certifications (
    id         TEXT PRIMARY KEY,
    account_id TEXT NOT NULL,
    entry_date TEXT,
    cert_type  TEXT NOT NULL,
    cert_name  TEXT NOT NULL,
    cert_date  TEXT NOT NULL,
    file_id    TEXT,
    notes      TEXT
);

CREATE INDEX IF NOT EXISTS idx_account_certifications_account
    ON account_certifications (account_id);
";

pub(super) fn bootstrap(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}
