use chrono::{SecondsFormat, Utc};
use hoptrace_engine::PathTree;
use rusqlite::{Connection, params};

use crate::Result;

pub fn ensure_target(conn: &Connection, target: &str) -> Result<i64> {
    conn.execute(
        "INSERT OR IGNORE INTO targets (name) VALUES (?1)",
        [target],
    )?;
    conn.execute(
        "UPDATE targets SET updated_at = ?2 WHERE name = ?1",
        params![target, Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)],
    )?;
    let id = conn.query_row("SELECT id FROM targets WHERE name = ?1", [target], |row| {
        row.get(0)
    })?;
    Ok(id)
}

/// Returns true when the row was new.
pub fn insert_node(conn: &Connection, target_id: i64, hop_number: u32, hostname: &str) -> Result<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO hop_nodes (target_id, hop_number, hostname) VALUES (?1, ?2, ?3)",
        params![target_id, hop_number as i64, hostname],
    )?;
    Ok(inserted > 0)
}

/// Returns true when the row was new.
pub fn insert_ip(conn: &Connection, target_id: i64, hop_number: u32, ip: &str) -> Result<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO hop_ips (target_id, hop_number, ip_address) VALUES (?1, ?2, ?3)",
        params![target_id, hop_number as i64, ip],
    )?;
    Ok(inserted > 0)
}

/// Fold every stored node and address into a tree.
pub fn load_tree(conn: &Connection) -> Result<PathTree> {
    let mut tree = PathTree::new();

    let mut stmt = conn.prepare(
        r#"
        SELECT t.name, n.hop_number, n.hostname
        FROM hop_nodes n
        JOIN targets t ON n.target_id = t.id
        "#,
    )?;
    let nodes = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    for (target, hop_number, hostname) in nodes {
        if let Ok(hop_number) = u32::try_from(hop_number) {
            tree.insert_hostname(&target, hop_number, &hostname);
        }
    }

    let mut stmt = conn.prepare(
        r#"
        SELECT t.name, i.hop_number, i.ip_address
        FROM hop_ips i
        JOIN targets t ON i.target_id = t.id
        "#,
    )?;
    let ips = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    for (target, hop_number, ip) in ips {
        if let Ok(hop_number) = u32::try_from(hop_number) {
            tree.insert_ip(&target, hop_number, &ip);
        }
    }

    Ok(tree)
}

pub fn clear(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DELETE FROM hop_nodes;
        DELETE FROM hop_ips;
        DELETE FROM targets;
        "#,
    )?;
    Ok(())
}
