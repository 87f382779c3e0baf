use std::fmt;
use sqlx::mysql::MySqlConnectOptions;
use crate::database::structs::connector_lock::ConnectorLock;

#[derive(Clone)]
pub struct DatabaseConnectorMySQL {
    pub(crate) options: MySqlConnectOptions,
    pub(crate) database_name: String,
    pub(crate) endpoint: String,
    pub(crate) lock: ConnectorLock,
}

impl fmt::Debug for DatabaseConnectorMySQL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnectorMySQL")
            .field("options", &"<MySqlConnectOptions>")
            .field("database_name", &self.database_name)
            .field("endpoint", &self.endpoint)
            .field("lock", &self.lock)
            .finish()
    }
}

/// Server-level connection (no schema selected), used to create the schema.
#[derive(Clone)]
pub(crate) struct MySqlServerConnection {
    pub(crate) options: MySqlConnectOptions,
}
