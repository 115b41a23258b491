use crate::db::models::{ActionRecord, FileRecord};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ActionRow;
use rusqlite::{Connection, OptionalExtension, params};

/// Look up the id of an already-synced file by its recorded name.
pub fn find_file_id(conn: &Connection, name: &str) -> AppResult<Option<i64>> {
    let id = conn
        .query_row("SELECT id FROM Files WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(id)
}

/// Insert a new Files row and return its assigned id.
pub fn insert_file(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO Files (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

/// Remove every action attached to a file id (full-replacement policy).
pub fn delete_actions_for(conn: &Connection, file_id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM Actions WHERE id = ?1", [file_id])?;
    Ok(n)
}

pub fn insert_action(conn: &Connection, file_id: i64, action: &ActionRow) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO Actions (id, action_name, time)
         VALUES (?1, ?2, ?3)",
    )?;
    stmt.execute(params![file_id, action.name, action.seconds])?;
    Ok(())
}

/// All synced files with their current action counts, ordered by id.
pub fn load_files_with_counts(pool: &mut DbPool) -> AppResult<Vec<(FileRecord, i64)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT f.id, f.name, COUNT(a.id)
         FROM Files f
         LEFT JOIN Actions a ON a.id = f.id
         GROUP BY f.id, f.name
         ORDER BY f.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            FileRecord {
                id: row.get(0)?,
                name: row.get(1)?,
            },
            row.get::<_, i64>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Actions recorded for one file id, in insertion order.
pub fn load_actions_for(pool: &mut DbPool, file_id: i64) -> AppResult<Vec<ActionRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, action_name, time FROM Actions
         WHERE id = ?1
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map([file_id], |row| {
        Ok(ActionRecord {
            file_id: row.get(0)?,
            action_name: row.get(1)?,
            time: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
