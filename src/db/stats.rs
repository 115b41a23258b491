//! Database maintenance helpers for the `db` command.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::fs;

fn count_rows(pool: &mut DbPool, table: &str) -> AppResult<i64> {
    // Table names come from a fixed internal list, never from user input.
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let n = pool.conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(n)
}

/// Print a short summary of the database file and its tables.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    let size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    println!("🗄️  Database: {}", db_path);
    println!("   Size:     {} bytes", size);
    println!("   Files:    {}", count_rows(pool, "Files")?);
    println!("   Actions:  {}", count_rows(pool, "Actions")?);
    println!("   Log rows: {}", count_rows(pool, "log")?);

    Ok(())
}

/// Run SQLite's integrity check and report the result.
pub fn integrity_check(pool: &mut DbPool) -> AppResult<bool> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result == "ok")
}

pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}
