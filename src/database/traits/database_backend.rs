use async_trait::async_trait;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::select_options::SelectOptions;

/// One result row, columns in the order they were requested.
pub type Row = Vec<SqlValue>;

/// Uniform CRUD calls over one database target.
///
/// Every call takes the connector's lock, opens a new connection, runs its
/// statement, commits when it mutates, closes the connection and only then
/// returns. Identifiers are checked against an allow-list and quoted, values
/// are always bound.
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    /// Runs an arbitrary statement, DDL or DML.
    async fn execute_sql(&self, sql: &str, params: &[SqlValue]) -> Result<(), DatabaseError>;

    /// Runs one statement for each parameter set inside a single transaction
    /// and returns the total number of affected rows.
    async fn execute_many(&self, sql: &str, param_sets: &[Vec<SqlValue>]) -> Result<u64, DatabaseError>;

    /// Inserts one row made of exactly the given columns.
    ///
    /// Returns the auto-increment id assigned by the engine, or `None` when
    /// the engine did not assign one.
    async fn insert(&self, table: &str, details: &[(&str, SqlValue)]) -> Result<Option<i64>, DatabaseError>;

    /// Selects `columns` (all columns when empty), optionally filtered by
    /// `key_name = key_value`. No key means no filter.
    async fn select(
        &self,
        table: &str,
        columns: &[&str],
        key: Option<(&str, SqlValue)>,
    ) -> Result<Vec<Row>, DatabaseError> {
        let mut options = SelectOptions::new();
        if let Some((key_name, key_value)) = key {
            options = options.with_key(key_name, key_value);
        }
        self.select_with(table, columns, &options).await
    }

    async fn select_with(
        &self,
        table: &str,
        columns: &[&str],
        options: &SelectOptions,
    ) -> Result<Vec<Row>, DatabaseError>;

    /// Sets every column in `details` on rows where `key_name = key_value`.
    /// Matching zero rows is not an error.
    async fn update(
        &self,
        table: &str,
        details: &[(&str, SqlValue)],
        key_name: &str,
        key_value: SqlValue,
    ) -> Result<(), DatabaseError>;
}
