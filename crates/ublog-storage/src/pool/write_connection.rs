//! The single write connection. All mutations serialize through it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use ublog_core::errors::{StorageError, UblogError, UblogResult};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Mutex-guarded writer connection.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the writer for the given database file.
    pub fn open(path: &Path) -> UblogResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory writer (for testing).
    pub fn open_in_memory() -> UblogResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure holding the writer lock.
    pub fn with_conn_sync<F, T>(&self, f: F) -> UblogResult<T>
    where
        F: FnOnce(&Connection) -> UblogResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            UblogError::from(StorageError::LockPoisoned {
                message: format!("write connection: {e}"),
            })
        })?;
        f(&guard)
    }
}
