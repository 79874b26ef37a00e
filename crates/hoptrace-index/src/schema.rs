use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Storage layout
//
// Two independent files. `history.db` holds plain run history
// (requests + hops). `paths.db` holds its own run history
// (path_requests + path_hops) plus the aggregated tree
// (targets + hop_nodes + hop_ips), deduplicated by UNIQUE constraints.
//
// Files written before versioning carry user_version 0 and use the same
// table layout, so they are adopted in place instead of dropped.

pub fn init_history_schema(conn: &Connection) -> Result<()> {
    prepare(conn, drop_history_tables)?;

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            command TEXT NOT NULL,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
            target TEXT,
            hops_count INTEGER
        );

        CREATE TABLE IF NOT EXISTS hops (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            request_id INTEGER,
            hop_number INTEGER,
            hostname TEXT,
            ip_address TEXT,
            rtt1 REAL,
            rtt2 REAL,
            rtt3 REAL,
            FOREIGN KEY (request_id) REFERENCES requests (id)
        );

        CREATE INDEX IF NOT EXISTS idx_requests_timestamp ON requests(timestamp);
        CREATE INDEX IF NOT EXISTS idx_hops_request_id ON hops(request_id);
        "#,
    )?;

    set_version(conn)
}

pub fn init_paths_schema(conn: &Connection) -> Result<()> {
    prepare(conn, drop_paths_tables)?;

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS targets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS hop_nodes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            target_id INTEGER NOT NULL,
            hop_number INTEGER NOT NULL,
            hostname TEXT NOT NULL,
            UNIQUE(target_id, hop_number, hostname)
        );

        CREATE TABLE IF NOT EXISTS hop_ips (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            target_id INTEGER NOT NULL,
            hop_number INTEGER NOT NULL,
            ip_address TEXT NOT NULL,
            UNIQUE(target_id, hop_number, ip_address)
        );

        CREATE TABLE IF NOT EXISTS path_requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            command TEXT NOT NULL,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
            target TEXT,
            hops_count INTEGER
        );

        CREATE TABLE IF NOT EXISTS path_hops (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            request_id INTEGER,
            hop_number INTEGER,
            hostname TEXT,
            ip_address TEXT,
            rtt1 REAL,
            rtt2 REAL,
            rtt3 REAL,
            FOREIGN KEY (request_id) REFERENCES path_requests (id)
        );

        CREATE INDEX IF NOT EXISTS idx_path_requests_timestamp ON path_requests(timestamp);
        CREATE INDEX IF NOT EXISTS idx_path_hops_request_id ON path_hops(request_id);
        "#,
    )?;

    set_version(conn)
}

fn prepare(conn: &Connection, drop_tables: fn(&Connection) -> Result<()>) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != 0 && current_version != SCHEMA_VERSION {
        tracing::warn!(
            found = current_version,
            expected = SCHEMA_VERSION,
            "schema version mismatch, recreating tables"
        );
        drop_tables(conn)?;
    }
    Ok(())
}

fn set_version(conn: &Connection) -> Result<()> {
    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;
    Ok(())
}

fn drop_history_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS hops;
        DROP TABLE IF EXISTS requests;
        "#,
    )?;
    Ok(())
}

fn drop_paths_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS path_hops;
        DROP TABLE IF EXISTS path_requests;
        DROP TABLE IF EXISTS hop_ips;
        DROP TABLE IF EXISTS hop_nodes;
        DROP TABLE IF EXISTS targets;
        "#,
    )?;
    Ok(())
}
