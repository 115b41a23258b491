use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// Idempotent: safe to run on every sync, so a database path that does not
/// exist yet is usable without a separate `init` step. `Actions.id` holds
/// the owning file's id; the one-to-many link is enforced by the sync logic
/// rather than a foreign-key constraint.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS Files (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS Actions (
            id          INTEGER NOT NULL,
            action_name TEXT NOT NULL,
            time        REAL
        );

        CREATE INDEX IF NOT EXISTS idx_actions_file ON Actions(id);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
