//! Schema reconciliation against the model registry.
//!
//! For each registered model: create the table if it does not exist, add any
//! declared column missing from the live schema, then apply foreign keys
//! best-effort. Nothing is ever dropped or rewritten.

use sqlx::{AnyPool, Row};

use crate::db::{DatabaseError, DriverKind};
use crate::schema::{ColumnSpec, ModelDescriptor, registered_models};

/// Reconcile every registered model, in registration order. Any failure
/// aborts the run; there is no partial-recovery path.
pub async fn auto_migrate(pool: &AnyPool, driver: DriverKind) -> Result<(), DatabaseError> {
    for model in registered_models() {
        migrate_model(pool, driver, model).await?;
    }

    tracing::info!("database migrated successfully");
    Ok(())
}

async fn migrate_model(
    pool: &AnyPool,
    driver: DriverKind,
    model: &ModelDescriptor,
) -> Result<(), DatabaseError> {
    sqlx::query(&create_table_sql(model, driver))
        .execute(pool)
        .await
        .map_err(DatabaseError::Migration)?;

    let existing = existing_columns(pool, driver, model.table).await?;
    for column in model.columns {
        if !existing.iter().any(|name| name == column.name) {
            sqlx::query(&add_column_sql(model.table, column, driver))
                .execute(pool)
                .await
                .map_err(DatabaseError::Migration)?;
        }
    }

    for column in model.columns {
        if let Some(sql) = add_foreign_key_sql(model.table, column) {
            // Fails on the duplicate constraint name when re-run; ignored.
            let _ = sqlx::query(&sql).execute(pool).await;
        }
    }

    tracing::debug!(table = model.table, "model reconciled");
    Ok(())
}

/// `CREATE TABLE IF NOT EXISTS` statement covering the declared columns and
/// primary key. Identifiers come from the static registry, so they are
/// emitted unquoted.
pub fn create_table_sql(model: &ModelDescriptor, driver: DriverKind) -> String {
    let mut defs: Vec<String> = model
        .columns
        .iter()
        .map(|column| column_def(column, driver))
        .collect();

    let keys: Vec<&str> = model
        .columns
        .iter()
        .filter(|column| column.primary_key)
        .map(|column| column.name)
        .collect();
    if !keys.is_empty() {
        defs.push(format!("PRIMARY KEY ({})", keys.join(", ")));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        model.table,
        defs.join(", ")
    )
}

/// Additive `ALTER TABLE` statement for a column missing from the live table.
pub fn add_column_sql(table: &str, column: &ColumnSpec, driver: DriverKind) -> String {
    format!("ALTER TABLE {} ADD COLUMN {}", table, column_def(column, driver))
}

/// Foreign-key constraint with a deterministic name; re-runs hit the
/// duplicate name and are ignored by the caller.
pub fn add_foreign_key_sql(table: &str, column: &ColumnSpec) -> Option<String> {
    let (ref_table, ref_column) = column.references?;
    let column = column.name;
    Some(format!(
        "ALTER TABLE {table} ADD CONSTRAINT fk_{table}_{column} \
         FOREIGN KEY ({column}) REFERENCES {ref_table} ({ref_column})"
    ))
}

fn column_def(column: &ColumnSpec, driver: DriverKind) -> String {
    let mut def = format!("{} {}", column.name, column.ty.sql(driver));
    if !column.nullable {
        def.push_str(" NOT NULL");
    }
    if let Some(expr) = column.default {
        def.push_str(" DEFAULT ");
        def.push_str(expr);
    }
    if column.unique {
        def.push_str(" UNIQUE");
    }
    def
}

/// Column names the live table already has, per `information_schema`.
async fn existing_columns(
    pool: &AnyPool,
    driver: DriverKind,
    table: &str,
) -> Result<Vec<String>, DatabaseError> {
    let rows = sqlx::query(existing_columns_query(driver))
        .bind(table)
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::Migration)?;

    rows.iter()
        .map(|row| row.try_get::<String, _>(0).map_err(DatabaseError::Migration))
        .collect()
}

/// Per-driver lookup for the live column set. Postgres needs the text cast
/// because `column_name` is of type `name` there.
pub fn existing_columns_query(driver: DriverKind) -> &'static str {
    match driver {
        DriverKind::MySql => {
            "SELECT column_name FROM information_schema.columns \
             WHERE table_schema = DATABASE() AND table_name = ?"
        }
        DriverKind::Postgres => {
            "SELECT column_name::text FROM information_schema.columns \
             WHERE table_schema = current_schema() AND table_name = $1"
        }
    }
}
