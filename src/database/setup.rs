use anyhow::{Context, Result};

use super::connection::DbConn;

/// Drop and recreate the whole schema. The database is a mirror of the
/// upstream export, so a full rebuild on ingest is cheaper than migrations.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");

    conn.execute_batch(schema_sql)
        .context("Failed to apply database schema")?;

    log::info!("Database schema reset successfully");
    Ok(())
}
