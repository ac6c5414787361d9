pub mod queries;

use anyhow::Context;
use rusqlite::Connection;

static SCHEMA: &str = include_str!("schema.sql");

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .context("failed to set database pragmas")?;

    conn.execute_batch(SCHEMA)
        .context("failed to apply schema")?;

    Ok(conn)
}
