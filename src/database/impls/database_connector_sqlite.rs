use std::path::{Path, PathBuf};
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row, TypeInfo, ValueRef};
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::connector_lock::ConnectorLock;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::query_builder::QueryBuilder;
use crate::database::structs::select_options::SelectOptions;
use crate::database::traits::connection_factory::ConnectionFactory;
use crate::database::traits::database_backend::{DatabaseBackend, Row as ResultRow};

const ENGINE: DatabaseDrivers = DatabaseDrivers::sqlite3;

impl DatabaseConnectorSQLite {
    /// The file is created on first use when it does not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> DatabaseConnectorSQLite {
        DatabaseConnectorSQLite {
            path: path.into(),
            lock: ConnectorLock::new(),
        }
    }

    #[tracing::instrument(level = "debug", skip(config))]
    pub fn database_connector(config: &DatabaseConfig) -> Result<DatabaseConnector, DatabaseError> {
        let path = config
            .path
            .clone()
            .ok_or_else(|| DatabaseError::Configuration(String::from("the sqlite3 engine needs a database path")))?;
        info!("{} Using database file {}", ENGINE.log_prefix(), path);
        Ok(DatabaseConnector {
            mysql: None,
            sqlite: Some(DatabaseConnectorSQLite::new(path)),
            engine: Some(ENGINE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lock(&self) -> &ConnectorLock {
        &self.lock
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Warn, Duration::from_secs(1))
    }
}

#[async_trait]
impl ConnectionFactory for DatabaseConnectorSQLite {
    type Connection = SqliteConnection;

    async fn open(&self) -> Result<SqliteConnection, DatabaseError> {
        self.connect_options().connect().await.map_err(|connect_error| {
            error!("{} Unable to open database file {}: {}", ENGINE.log_prefix(), self.path.display(), connect_error);
            DatabaseError::ConnectionError(connect_error)
        })
    }

    async fn close(&self, connection: SqliteConnection) -> Result<(), DatabaseError> {
        connection.close().await.map_err(DatabaseError::ConnectionError)
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug", skip(self, params))]
    async fn execute_sql(&self, sql: &str, params: &[SqlValue]) -> Result<(), DatabaseError> {
        let sql = sql.to_string();
        let params = params.to_vec();
        self.lock.run(self, move |connection| Box::pin(async move {
            let mut query = sqlx::query(&sql);
            for value in params {
                query = value.bind_to(query);
            }
            let result = query.execute(&mut *connection).await.map_err(DatabaseError::StatementError)?;
            debug!("{} Statement affected {} rows", ENGINE.log_prefix(), result.rows_affected());
            Ok(())
        })).await
    }

    #[tracing::instrument(level = "debug", skip(self, param_sets))]
    async fn execute_many(&self, sql: &str, param_sets: &[Vec<SqlValue>]) -> Result<u64, DatabaseError> {
        if param_sets.is_empty() {
            return Ok(0);
        }
        let sql = sql.to_string();
        let param_sets = param_sets.to_vec();
        self.lock.run(self, move |connection| Box::pin(async move {
            let mut transaction = connection.begin().await.map_err(DatabaseError::StatementError)?;
            let mut affected = 0u64;
            for params in param_sets {
                let mut query = sqlx::query(&sql);
                for value in params {
                    query = value.bind_to(query);
                }
                affected += query.execute(&mut *transaction).await.map_err(DatabaseError::StatementError)?.rows_affected();
            }
            transaction.commit().await.map_err(DatabaseError::StatementError)?;
            debug!("{} Bulk statement affected {} rows", ENGINE.log_prefix(), affected);
            Ok(affected)
        })).await
    }

    #[tracing::instrument(level = "debug", skip(self, details))]
    async fn insert(&self, table: &str, details: &[(&str, SqlValue)]) -> Result<Option<i64>, DatabaseError> {
        let columns: Vec<&str> = details.iter().map(|(column, _)| *column).collect();
        let statement = QueryBuilder::new(ENGINE).insert(table, &columns)?;
        let values: Vec<SqlValue> = details.iter().map(|(_, value)| value.clone()).collect();
        let table = table.to_string();
        self.lock.run(self, move |connection| Box::pin(async move {
            let mut query = sqlx::query(&statement);
            for value in values {
                query = value.bind_to(query);
            }
            let result = query.execute(&mut *connection).await.map_err(DatabaseError::StatementError)?;
            if result.rows_affected() == 0 {
                return Ok(None);
            }
            // Every connection starts at rowid 0, so 0 is either a real row or a WITHOUT ROWID table.
            let row_id = result.last_insert_rowid();
            if row_id == 0 && !has_rowid(connection, &table).await? {
                return Ok(None);
            }
            Ok(Some(row_id))
        })).await
    }

    #[tracing::instrument(level = "debug", skip(self, options))]
    async fn select_with(
        &self,
        table: &str,
        columns: &[&str],
        options: &SelectOptions,
    ) -> Result<Vec<ResultRow>, DatabaseError> {
        let statement = QueryBuilder::new(ENGINE).select(table, columns, options)?;
        let key_value = options.key_value();
        self.lock.run(self, move |connection| Box::pin(async move {
            let mut query = sqlx::query(&statement);
            if let Some(value) = key_value {
                query = value.bind_to(query);
            }
            let mut rows = query.fetch(&mut *connection);
            let mut selected = Vec::new();
            while let Some(row) = rows.try_next().await.map_err(DatabaseError::StatementError)? {
                selected.push(decode_row(&row)?);
            }
            Ok(selected)
        })).await
    }

    #[tracing::instrument(level = "debug", skip(self, details, key_value))]
    async fn update(
        &self,
        table: &str,
        details: &[(&str, SqlValue)],
        key_name: &str,
        key_value: SqlValue,
    ) -> Result<(), DatabaseError> {
        let columns: Vec<&str> = details.iter().map(|(column, _)| *column).collect();
        let statement = QueryBuilder::new(ENGINE).update(table, &columns, key_name, &key_value)?;
        let mut values: Vec<SqlValue> = details.iter().map(|(_, value)| value.clone()).collect();
        if !key_value.is_null() {
            values.push(key_value);
        }
        self.lock.run(self, move |connection| Box::pin(async move {
            let mut query = sqlx::query(&statement);
            for value in values {
                query = value.bind_to(query);
            }
            let result = query.execute(&mut *connection).await.map_err(DatabaseError::StatementError)?;
            if result.rows_affected() == 0 {
                debug!("{} Update matched no rows", ENGINE.log_prefix());
            }
            Ok(())
        })).await
    }
}

async fn has_rowid(connection: &mut SqliteConnection, table: &str) -> Result<bool, DatabaseError> {
    let (schema, name) = match table.split_once('.') {
        Some((schema, name)) => (Some(schema), name),
        None => (None, table),
    };
    let without_rowid: Option<i64> = sqlx::query_scalar(
        "SELECT wr FROM pragma_table_list WHERE name = ? AND (? IS NULL OR schema = ?) LIMIT 1",
    )
    .bind(name)
    .bind(schema)
    .bind(schema)
    .fetch_optional(&mut *connection)
    .await
    .map_err(DatabaseError::StatementError)?;
    Ok(without_rowid != Some(1))
}

fn decode_row(row: &SqliteRow) -> Result<ResultRow, DatabaseError> {
    (0..row.len()).map(|index| decode_column(row, index)).collect()
}

// Storage class of the stored value, not the declared column type.
fn decode_column(row: &SqliteRow, index: usize) -> Result<SqlValue, DatabaseError> {
    let raw = row.try_get_raw(index).map_err(DatabaseError::StatementError)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }
    let type_name = raw.type_info().name().to_string();
    let value = match type_name.as_str() {
        "INTEGER" => SqlValue::Integer(row.try_get_unchecked::<i64, _>(index).map_err(DatabaseError::StatementError)?),
        "BOOLEAN" => SqlValue::Boolean(row.try_get_unchecked::<bool, _>(index).map_err(DatabaseError::StatementError)?),
        "REAL" => SqlValue::Real(row.try_get_unchecked::<f64, _>(index).map_err(DatabaseError::StatementError)?),
        "BLOB" => SqlValue::Blob(row.try_get_unchecked::<Vec<u8>, _>(index).map_err(DatabaseError::StatementError)?),
        _ => SqlValue::Text(row.try_get_unchecked::<String, _>(index).map_err(DatabaseError::StatementError)?),
    };
    Ok(value)
}
