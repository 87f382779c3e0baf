use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use futures_util::TryStreamExt;
use log::{debug, error, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{ConnectOptions, Connection, Row, TypeInfo, ValueRef};
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::connector_lock::ConnectorLock;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::{DatabaseConnectorMySQL, MySqlServerConnection};
use crate::database::structs::query_builder::QueryBuilder;
use crate::database::structs::select_options::SelectOptions;
use crate::database::traits::connection_factory::ConnectionFactory;
use crate::database::traits::database_backend::{DatabaseBackend, Row as ResultRow};

const ENGINE: DatabaseDrivers = DatabaseDrivers::mysql;

fn connect_options(dsn: &str) -> Result<MySqlConnectOptions, DatabaseError> {
    let options = MySqlConnectOptions::from_str(dsn)
        .map_err(|parse_error| DatabaseError::Configuration(parse_error.to_string()))?;
    Ok(options
        .log_statements(log::LevelFilter::Debug)
        .log_slow_statements(log::LevelFilter::Warn, Duration::from_secs(1)))
}

impl DatabaseConnectorMySQL {
    /// Validates the configuration and makes sure the schema exists before
    /// the connector is handed out.
    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn new(config: &DatabaseConfig) -> Result<DatabaseConnectorMySQL, DatabaseError> {
        config
            .validate()
            .map_err(|validation_error| DatabaseError::Configuration(validation_error.to_string()))?;
        let database_name = config
            .database_name
            .clone()
            .ok_or_else(|| DatabaseError::Configuration(String::from("the mysql engine needs a database_name")))?;
        let dsn = config
            .mysql_dsn(true)
            .map_err(|dsn_error| DatabaseError::Configuration(dsn_error.to_string()))?;
        let server_dsn = config
            .mysql_dsn(false)
            .map_err(|dsn_error| DatabaseError::Configuration(dsn_error.to_string()))?;
        let connector = DatabaseConnectorMySQL {
            options: connect_options(&dsn)?,
            database_name,
            endpoint: config.mysql_endpoint(),
            lock: ConnectorLock::new(),
        };
        let server = MySqlServerConnection {
            options: connect_options(&server_dsn)?,
        };
        connector.create_database(&server).await?;
        Ok(connector)
    }

    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn database_connector(config: &DatabaseConfig) -> Result<DatabaseConnector, DatabaseError> {
        let connector = DatabaseConnectorMySQL::new(config).await.inspect_err(|connect_error| {
            error!("{} Unable to prepare {} on {}: {}", ENGINE.log_prefix(), ENGINE.engine_name(), config.mysql_endpoint(), connect_error);
        })?;
        Ok(DatabaseConnector {
            mysql: Some(connector),
            sqlite: None,
            engine: Some(ENGINE),
        })
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn lock(&self) -> &ConnectorLock {
        &self.lock
    }

    async fn create_database(&self, server: &MySqlServerConnection) -> Result<(), DatabaseError> {
        let statement = QueryBuilder::new(ENGINE).create_database(&self.database_name)?;
        info!("{} Ensuring database {} exists on {}", ENGINE.log_prefix(), self.database_name, self.endpoint);
        self.lock.run(server, move |connection| Box::pin(async move {
            sqlx::Executor::execute(&mut *connection, sqlx::raw_sql(&statement)).await.map_err(DatabaseError::StatementError)?;
            Ok(())
        })).await
    }
}

#[async_trait]
impl ConnectionFactory for DatabaseConnectorMySQL {
    type Connection = MySqlConnection;

    async fn open(&self) -> Result<MySqlConnection, DatabaseError> {
        self.options.connect().await.map_err(|connect_error| {
            error!("{} Unable to connect to {}: {}", ENGINE.log_prefix(), self.endpoint, connect_error);
            DatabaseError::ConnectionError(connect_error)
        })
    }

    async fn close(&self, connection: MySqlConnection) -> Result<(), DatabaseError> {
        connection.close().await.map_err(DatabaseError::ConnectionError)
    }
}

#[async_trait]
impl ConnectionFactory for MySqlServerConnection {
    type Connection = MySqlConnection;

    async fn open(&self) -> Result<MySqlConnection, DatabaseError> {
        self.options.connect().await.map_err(DatabaseError::ConnectionError)
    }

    async fn close(&self, connection: MySqlConnection) -> Result<(), DatabaseError> {
        connection.close().await.map_err(DatabaseError::ConnectionError)
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorMySQL {
    #[tracing::instrument(level = "debug", skip(self, params))]
    async fn execute_sql(&self, sql: &str, params: &[SqlValue]) -> Result<(), DatabaseError> {
        let sql = sql.to_string();
        let params = params.to_vec();
        self.lock.run(self, move |connection| Box::pin(async move {
            // Without parameters the text protocol runs statements the server refuses to prepare.
            let result = if params.is_empty() {
                sqlx::Executor::execute(&mut *connection, sqlx::raw_sql(&sql)).await
            } else {
                let mut query = sqlx::query(&sql);
                for value in params {
                    query = value.bind_to(query);
                }
                query.execute(&mut *connection).await
            }
            .map_err(DatabaseError::StatementError)?;
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
            // 0 is a real id only when an AUTO_INCREMENT column took it (NO_AUTO_VALUE_ON_ZERO).
            let row_id = i64::try_from(result.last_insert_id()).ok();
            if row_id == Some(0) && !has_auto_increment(connection, &table).await? {
                return Ok(None);
            }
            Ok(row_id)
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

async fn has_auto_increment(connection: &mut MySqlConnection, table: &str) -> Result<bool, DatabaseError> {
    let (schema, name) = match table.split_once('.') {
        Some((schema, name)) => (Some(schema), name),
        None => (None, table),
    };
    let columns: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM information_schema.COLUMNS \
         WHERE TABLE_SCHEMA = COALESCE(?, DATABASE()) AND TABLE_NAME = ? AND EXTRA LIKE '%auto_increment%'",
    )
    .bind(schema)
    .bind(name)
    .fetch_one(&mut *connection)
    .await
    .map_err(DatabaseError::StatementError)?;
    Ok(columns > 0)
}

/// Widens a single precision `FLOAT` through its shortest decimal form, so a
/// stored `0.1` reads back as `0.1` and not `0.10000000149011612`.
pub(crate) fn widen_float(value: f32) -> f64 {
    value.to_string().parse::<f64>().unwrap_or(f64::from(value))
}

fn decode_row(row: &MySqlRow) -> Result<ResultRow, DatabaseError> {
    (0..row.len()).map(|index| decode_column(row, index)).collect()
}

fn decode_column(row: &MySqlRow, index: usize) -> Result<SqlValue, DatabaseError> {
    let raw = row.try_get_raw(index).map_err(DatabaseError::StatementError)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }
    let type_name = raw.type_info().name().to_string();
    let value = match type_name.as_str() {
        "BOOLEAN" => SqlValue::Boolean(row.try_get_unchecked::<bool, _>(index).map_err(DatabaseError::StatementError)?),
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED" | "BIGINT UNSIGNED" => {
            let unsigned = row.try_get_unchecked::<u64, _>(index).map_err(DatabaseError::StatementError)?;
            // BIGINT UNSIGNED above i64::MAX keeps its digits as text
            i64::try_from(unsigned)
                .map(SqlValue::Integer)
                .unwrap_or_else(|_| SqlValue::Text(unsigned.to_string()))
        }
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => {
            SqlValue::Integer(row.try_get_unchecked::<i64, _>(index).map_err(DatabaseError::StatementError)?)
        }
        "FLOAT" => SqlValue::Real(widen_float(row.try_get_unchecked::<f32, _>(index).map_err(DatabaseError::StatementError)?)),
        "DOUBLE" => SqlValue::Real(row.try_get_unchecked::<f64, _>(index).map_err(DatabaseError::StatementError)?),
        "DATE" => SqlValue::Text(row.try_get_unchecked::<NaiveDate, _>(index).map_err(DatabaseError::StatementError)?.to_string()),
        "TIME" => SqlValue::Text(row.try_get_unchecked::<NaiveTime, _>(index).map_err(DatabaseError::StatementError)?.to_string()),
        "DATETIME" => SqlValue::Text(
            row.try_get_unchecked::<NaiveDateTime, _>(index)
                .map_err(DatabaseError::StatementError)?
                .format("%Y-%m-%d %H:%M:%S%.f")
                .to_string(),
        ),
        "TIMESTAMP" => SqlValue::Text(
            row.try_get_unchecked::<DateTime<Utc>, _>(index)
                .map_err(DatabaseError::StatementError)?
                .format("%Y-%m-%d %H:%M:%S%.f")
                .to_string(),
        ),
        "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BINARY" | "VARBINARY" | "BIT" | "GEOMETRY" => {
            SqlValue::Blob(row.try_get_unchecked::<Vec<u8>, _>(index).map_err(DatabaseError::StatementError)?)
        }
        _ => SqlValue::Text(row.try_get_unchecked::<String, _>(index).map_err(DatabaseError::StatementError)?),
    };
    Ok(value)
}
