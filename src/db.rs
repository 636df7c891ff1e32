//! Connection provider and driver-value conversion.
//!
//! The pool is the only shared resource in the process. Executing a statement
//! through `&MySqlPool` acquires a connection and returns it to the pool on
//! every exit path, including errors, so handlers never manage connections
//! directly.

use crate::config::AppConfig;
use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;
use sqlx::mysql::{MySqlPoolOptions, MySqlQueryResult, MySqlRow};
use sqlx::MySqlPool;
use utoipa::ToSchema;

/// Build the shared pool from config. Fails fast if the server is unreachable.
pub async fn connect(config: &AppConfig) -> Result<MySqlPool, AppError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// What the driver reports for INSERT/UPDATE/DELETE. Serialized as-is in
/// responses; no schema transformation.
#[derive(Serialize, ToSchema)]
pub struct ExecStatus {
    pub rows_affected: u64,
    pub last_insert_id: u64,
}

impl From<MySqlQueryResult> for ExecStatus {
    fn from(res: MySqlQueryResult) -> Self {
        ExecStatus {
            rows_affected: res.rows_affected(),
            last_insert_id: res.last_insert_id(),
        }
    }
}

/// Convert a driver row to a JSON object keyed by column name.
pub fn row_to_json(row: &MySqlRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &MySqlRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i8>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<u64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f32>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(f64::from(n)) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    // BOOLEAN is TINYINT(1) in MySQL, so the i8 branch above returns it as
    // 0/1, the same shape the driver reports.
    // DECIMAL columns render as text, matching the driver's lossless form.
    if let Ok(Some(d)) = row.try_get::<Option<sqlx::types::BigDecimal>, _>(name) {
        return Value::String(d.to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDate>, _>(name) {
        return Value::String(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(j)) = row.try_get::<Option<serde_json::Value>, _>(name) {
        return j;
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exec_status_serializes_driver_fields() {
        let status = ExecStatus {
            rows_affected: 1,
            last_insert_id: 47,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["rows_affected"], 1);
        assert_eq!(json["last_insert_id"], 47);
    }
}
