use hoptrace_types::{DiagnosticRun, HopObservation, RunId, RunSummary};
use rusqlite::{Connection, OptionalExtension, params};

use super::RunTables;
use crate::records::{HopRow, StoredRun};
use crate::{Error, Result};

pub fn insert(
    conn: &Connection,
    tables: RunTables,
    run: &DiagnosticRun,
    timestamp: &str,
) -> Result<RunId> {
    conn.execute(
        &format!(
            "INSERT INTO {} (command, target, hops_count, timestamp) VALUES (?1, ?2, ?3, ?4)",
            tables.runs
        ),
        params![&run.command, &run.target, run.hop_count() as i64, timestamp],
    )?;
    let id = conn.last_insert_rowid();

    let mut stmt = conn.prepare(&format!(
        r#"
        INSERT INTO {} (request_id, hop_number, hostname, ip_address, rtt1, rtt2, rtt3)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        tables.hops
    ))?;
    for hop in &run.hops {
        insert_hop(&mut stmt, id, hop)?;
    }

    Ok(RunId::new(id))
}

fn insert_hop(stmt: &mut rusqlite::Statement<'_>, id: i64, hop: &HopObservation) -> Result<()> {
    stmt.execute(params![
        id,
        hop.hop_number as i64,
        &hop.hostname,
        &hop.ip_address,
        hop.rtt1,
        hop.rtt2,
        hop.rtt3
    ])?;
    Ok(())
}

pub fn list(conn: &Connection, tables: RunTables, limit: usize) -> Result<Vec<RunSummary>> {
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT id, command, target, hops_count, timestamp
        FROM {}
        ORDER BY timestamp DESC, id DESC
        LIMIT ?1
        "#,
        tables.runs
    ))?;

    let runs = stmt
        .query_map([limit as i64], |row| {
            Ok(RunSummary {
                id: RunId::new(row.get(0)?),
                command: row.get(1)?,
                target: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                hop_count: row.get::<_, Option<i64>>(3)?.unwrap_or(0).max(0) as usize,
                timestamp: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(runs)
}

pub fn get(conn: &Connection, tables: RunTables, id: RunId) -> Result<Option<StoredRun>> {
    let header = conn
        .query_row(
            &format!(
                "SELECT command, target, timestamp FROM {} WHERE id = ?1",
                tables.runs
            ),
            [id.get()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            },
        )
        .optional()?;

    let Some((command, target, timestamp)) = header else {
        return Ok(None);
    };

    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT hop_number, hostname, ip_address, rtt1, rtt2, rtt3
        FROM {}
        WHERE request_id = ?1
        ORDER BY hop_number, id
        "#,
        tables.hops
    ))?;

    let rows = stmt
        .query_map([id.get()], |row| {
            Ok(HopRow {
                hop_number: row.get(0)?,
                hostname: row.get(1)?,
                ip_address: row.get(2)?,
                rtts: [row.get(3)?, row.get(4)?, row.get(5)?],
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    let hops = rows.iter().filter_map(HopRow::to_observation).collect();

    Ok(Some(StoredRun {
        id,
        timestamp,
        run: DiagnosticRun {
            target: target.unwrap_or_else(|| hoptrace_types::target_of(&command)),
            command,
            hops,
        },
    }))
}

pub fn delete(conn: &Connection, tables: RunTables, id: RunId) -> Result<bool> {
    conn.execute(
        &format!("DELETE FROM {} WHERE request_id = ?1", tables.hops),
        [id.get()],
    )?;
    let removed = conn.execute(
        &format!("DELETE FROM {} WHERE id = ?1", tables.runs),
        [id.get()],
    )?;

    match removed {
        0 => Ok(false),
        1 => Ok(true),
        n => Err(Error::Query(format!("deleted {} rows for run {}", n, id))),
    }
}

pub fn clear(conn: &Connection, tables: RunTables) -> Result<usize> {
    conn.execute(&format!("DELETE FROM {}", tables.hops), [])?;
    let removed = conn.execute(&format!("DELETE FROM {}", tables.runs), [])?;
    Ok(removed)
}

pub fn count(conn: &Connection, tables: RunTables) -> Result<usize> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", tables.runs),
        [],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}
