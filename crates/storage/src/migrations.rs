//! Embedded schema migrations.
//!
//! The SQL files under `migrations/` are compiled into the binary by
//! `sqlx::migrate!`. They can be applied against a live pool, or rendered as a
//! plain SQL script for pipelines that apply schema changes themselves.

use sqlx::{
    PgPool,
    migrate::{Migration, Migrator},
};

use crate::error::Result;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn run(pool: &PgPool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("Applied migrations up to version {:?}", latest_version());
    Ok(())
}

/// Forward migrations in the order they are applied.
pub fn embedded() -> impl Iterator<Item = &'static Migration> {
    MIGRATOR
        .iter()
        .filter(|migration| !migration.migration_type.is_down_migration())
}

pub fn latest_version() -> Option<i64> {
    embedded().map(|migration| migration.version).max()
}

/// Renders every forward migration as one SQL script, without a connection.
pub fn offline_script() -> String {
    let mut script = String::new();

    for migration in embedded() {
        script.push_str(&format!(
            "-- {} {}\n",
            migration.version, migration.description
        ));
        script.push_str(migration.sql.trim_end());
        script.push_str("\n\n");
    }

    script
}
