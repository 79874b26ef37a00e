use chrono::{SecondsFormat, Utc};
use hoptrace_engine::{PathTree, snapshot_of};
use hoptrace_types::{DiagnosticRun, HopObservation, PathSnapshot, RunId, RunSummary};
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

use crate::queries::{self, HISTORY_TABLES, PATH_TABLES, RunTables};
use crate::records::StoredRun;
use crate::schema;
use crate::Result;

/// Run-level CRUD over one table pair.
struct Runs<'a> {
    conn: &'a Connection,
    tables: RunTables,
}

impl Runs<'_> {
    fn save(&self, run: &DiagnosticRun) -> Result<RunId> {
        let tx = self.conn.unchecked_transaction()?;
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let id = queries::runs::insert(&tx, self.tables, run, &timestamp)?;
        tx.commit()?;
        info!(
            id = id.get(),
            command = %run.command,
            hops = run.hop_count(),
            table = self.tables.runs,
            "saved run"
        );
        Ok(id)
    }

    fn delete(&self, id: RunId) -> Result<bool> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = queries::runs::delete(&tx, self.tables, id)?;
        tx.commit()?;
        Ok(removed)
    }

    fn clear(&self) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = queries::runs::clear(&tx, self.tables)?;
        tx.commit()?;
        Ok(removed)
    }
}

fn open_connection(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    debug!(path = %db_path.display(), "opening database");
    Ok(Connection::open(db_path)?)
}

/// Plain run history (`history.db`).
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = open_connection(db_path)?;
        schema::init_history_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_history_schema(&conn)?;
        Ok(Self { conn })
    }

    fn runs(&self) -> Runs<'_> {
        Runs {
            conn: &self.conn,
            tables: HISTORY_TABLES,
        }
    }

    pub fn save(&self, run: &DiagnosticRun) -> Result<RunId> {
        self.runs().save(run)
    }

    /// Most recent runs first.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<RunSummary>> {
        queries::runs::list(&self.conn, HISTORY_TABLES, limit)
    }

    /// A run with its row id and save time; hops without a hop number are dropped.
    pub fn load_run(&self, id: RunId) -> Result<Option<StoredRun>> {
        queries::runs::get(&self.conn, HISTORY_TABLES, id)
    }

    /// Returns false when no such run exists.
    pub fn delete_run(&self, id: RunId) -> Result<bool> {
        self.runs().delete(id)
    }

    /// Remove every run; returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        self.runs().clear()
    }

    pub fn count(&self) -> Result<usize> {
        queries::runs::count(&self.conn, HISTORY_TABLES)
    }
}

/// Path-page run history plus the aggregated path tree (`paths.db`).
pub struct PathStore {
    conn: Connection,
}

impl PathStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = open_connection(db_path)?;
        schema::init_paths_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_paths_schema(&conn)?;
        Ok(Self { conn })
    }

    fn runs(&self) -> Runs<'_> {
        Runs {
            conn: &self.conn,
            tables: PATH_TABLES,
        }
    }

    pub fn save(&self, run: &DiagnosticRun) -> Result<RunId> {
        self.runs().save(run)
    }

    pub fn list_recent(&self, limit: usize) -> Result<Vec<RunSummary>> {
        queries::runs::list(&self.conn, PATH_TABLES, limit)
    }

    pub fn load_run(&self, id: RunId) -> Result<Option<StoredRun>> {
        queries::runs::get(&self.conn, PATH_TABLES, id)
    }

    pub fn delete_run(&self, id: RunId) -> Result<bool> {
        self.runs().delete(id)
    }

    /// Remove the path-page run history only; the tree is kept.
    pub fn clear_runs(&self) -> Result<usize> {
        self.runs().clear()
    }

    /// Merge a run's hops into the tree for `target`. Placeholder values are
    /// ignored and repeated observations are stored once.
    pub fn accumulate(&self, target: &str, hops: &[HopObservation]) -> Result<()> {
        let snapshot = snapshot_of(target, hops);
        let Some(views) = snapshot.get(target).filter(|views| !views.is_empty()) else {
            debug!(dest = target, "nothing to accumulate");
            return Ok(());
        };

        let tx = self.conn.unchecked_transaction()?;
        let target_id = queries::aggregate::ensure_target(&tx, target)?;
        let mut added = 0usize;
        for view in views {
            for node in &view.nodes {
                added +=
                    queries::aggregate::insert_node(&tx, target_id, view.hop_number, node)? as usize;
            }
            for ip in &view.ips {
                added +=
                    queries::aggregate::insert_ip(&tx, target_id, view.hop_number, ip)? as usize;
            }
        }
        tx.commit()?;

        debug!(dest = target, added, "accumulated path observations");
        Ok(())
    }

    pub fn tree(&self) -> Result<PathTree> {
        queries::aggregate::load_tree(&self.conn)
    }

    pub fn snapshot(&self) -> Result<PathSnapshot> {
        Ok(self.tree()?.snapshot())
    }

    /// Clear the tree and the path-page run history.
    pub fn reset(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        queries::runs::clear(&tx, PATH_TABLES)?;
        queries::aggregate::clear(&tx)?;
        tx.commit()?;
        info!("path store reset");
        Ok(())
    }
}
