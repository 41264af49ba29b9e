//! Record store connection bootstrap.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas for the selected integrity mode.
//! - Ensure the roster schema before handing the store to repositories.
//!
//! # Invariants
//! - `foreign_keys` is ON exactly when integrity is `Strict`.
//! - A returned store always has all three roster tables.

use super::schema::ensure_schema;
use super::DbResult;
use crate::config::{ReferentialIntegrity, StoreConfig, StoreLocation};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Owner of the roster data file and its single live connection.
///
/// Repositories borrow the store; the connection lives exactly as long as
/// the store value.
#[derive(Debug)]
pub struct RecordStore {
    conn: Connection,
    integrity: ReferentialIntegrity,
}

impl RecordStore {
    /// Opens (or creates) a file-backed store with permissive integrity.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Self::open_with_config(&StoreConfig::file(path))
    }

    /// Opens a private in-memory store with permissive integrity.
    pub fn open_in_memory() -> DbResult<Self> {
        Self::open_with_config(&StoreConfig::in_memory())
    }

    /// Opens a store from explicit configuration.
    ///
    /// # Side effects
    /// - Creates the data file and roster tables when absent.
    /// - Emits `db_open` logging events with duration and status.
    pub fn open_with_config(config: &StoreConfig) -> DbResult<Self> {
        let started_at = Instant::now();
        let mode = config.location.mode_label();
        info!(
            "event=db_open module=roster_db status=start mode={mode} integrity={}",
            config.integrity
        );

        let opened = match &config.location {
            StoreLocation::File(path) => Connection::open(path),
            StoreLocation::Memory => Connection::open_in_memory(),
        };
        let conn = match opened {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=roster_db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match bootstrap_connection(&conn, config.integrity) {
            Ok(()) => {
                info!(
                    "event=db_open module=roster_db status=ok mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self {
                    conn,
                    integrity: config.integrity,
                })
            }
            Err(err) => {
                error!(
                    "event=db_open module=roster_db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Shared connection handle for repositories.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn integrity(&self) -> ReferentialIntegrity {
        self.integrity
    }
}

fn bootstrap_connection(conn: &Connection, integrity: ReferentialIntegrity) -> DbResult<()> {
    // The bundled SQLite build enables foreign keys by default, so the
    // permissive mode must switch them off explicitly.
    match integrity {
        ReferentialIntegrity::Permissive => conn.execute_batch("PRAGMA foreign_keys = OFF;")?,
        ReferentialIntegrity::Strict => conn.execute_batch("PRAGMA foreign_keys = ON;")?,
    }
    conn.busy_timeout(BUSY_TIMEOUT)?;
    ensure_schema(conn)?;
    Ok(())
}
