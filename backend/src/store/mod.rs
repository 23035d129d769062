//! Structured-data store backing the certification records.
//!
//! A single SQLite connection guarded by a mutex. Callers run their queries inside
//! `Database::with_conn`, normally from `web::block`, so the async workers never
//! block on disk I/O.

pub mod accounts;
pub mod certifications;
mod schema;

use crate::error::ServiceError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self, ServiceError> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, ServiceError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, ServiceError> {
        schema::bootstrap(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| ServiceError::Internal("database lock poisoned".to_string()))?;
        f(&conn)
    }
}
