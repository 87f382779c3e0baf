use async_trait::async_trait;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::select_options::SelectOptions;
use crate::database::traits::database_backend::{DatabaseBackend, Row};

impl DatabaseConnector {
    pub async fn new(config: &DatabaseConfig) -> Result<DatabaseConnector, DatabaseError> {
        match config.engine {
            DatabaseDrivers::sqlite3 => DatabaseConnectorSQLite::database_connector(config),
            DatabaseDrivers::mysql => DatabaseConnectorMySQL::database_connector(config).await,
        }
    }

    pub fn engine(&self) -> Option<DatabaseDrivers> {
        self.engine
    }

    pub fn backend(&self) -> Option<&dyn DatabaseBackend> {
        match self.engine.as_ref()? {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().map(|s| s as &dyn DatabaseBackend),
            DatabaseDrivers::mysql => self.mysql.as_ref().map(|m| m as &dyn DatabaseBackend),
        }
    }

    fn connected_backend(&self) -> Result<&dyn DatabaseBackend, DatabaseError> {
        self.backend()
            .ok_or_else(|| DatabaseError::Configuration(String::from("No database engine configured")))
    }
}

impl From<DatabaseConnectorSQLite> for DatabaseConnector {
    fn from(sqlite: DatabaseConnectorSQLite) -> Self {
        DatabaseConnector {
            mysql: None,
            sqlite: Some(sqlite),
            engine: Some(DatabaseDrivers::sqlite3),
        }
    }
}

impl From<DatabaseConnectorMySQL> for DatabaseConnector {
    fn from(mysql: DatabaseConnectorMySQL) -> Self {
        DatabaseConnector {
            mysql: Some(mysql),
            sqlite: None,
            engine: Some(DatabaseDrivers::mysql),
        }
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnector {
    async fn execute_sql(&self, sql: &str, params: &[SqlValue]) -> Result<(), DatabaseError> {
        self.connected_backend()?.execute_sql(sql, params).await
    }

    async fn execute_many(&self, sql: &str, param_sets: &[Vec<SqlValue>]) -> Result<u64, DatabaseError> {
        self.connected_backend()?.execute_many(sql, param_sets).await
    }

    async fn insert(&self, table: &str, details: &[(&str, SqlValue)]) -> Result<Option<i64>, DatabaseError> {
        self.connected_backend()?.insert(table, details).await
    }

    async fn select_with(
        &self,
        table: &str,
        columns: &[&str],
        options: &SelectOptions,
    ) -> Result<Vec<Row>, DatabaseError> {
        self.connected_backend()?.select_with(table, columns, options).await
    }

    async fn update(
        &self,
        table: &str,
        details: &[(&str, SqlValue)],
        key_name: &str,
        key_value: SqlValue,
    ) -> Result<(), DatabaseError> {
        self.connected_backend()?.update(table, details, key_name, key_value).await
    }
}
