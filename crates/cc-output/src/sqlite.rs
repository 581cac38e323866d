//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `occupancy` and `calls`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{CallRow, OccupancyRow, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    ///
    /// Rows left by an earlier run in the same directory are cleared, matching
    /// the CSV backend, which truncates its files.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS occupancy (
                 time           INTEGER NOT NULL,
                 busy_operators INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS calls (
                 call_id            INTEGER PRIMARY KEY,
                 priority           INTEGER NOT NULL,
                 arrival_time       INTEGER NOT NULL,
                 service_start_time INTEGER,
                 departure_time     INTEGER,
                 wait_time          INTEGER
             );
             DELETE FROM occupancy;
             DELETE FROM calls;",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO occupancy (time, busy_operators) VALUES (?1, ?2)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.time as i64, row.busy_operators as i64])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_calls(&mut self, rows: &[CallRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO calls \
                 (call_id, priority, arrival_time, service_start_time, departure_time, wait_time) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.call_id,
                    row.priority,
                    row.arrival_time as i64,
                    row.service_start_time.map(|t| t as i64),
                    row.departure_time.map(|t| t as i64),
                    row.wait_time.map(|t| t as i64),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
