use std::collections::BTreeMap;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::query_builder::QueryBuilder;

pub const MYSQL_DEFAULT_PORT: u16 = 3306;

impl DatabaseConfig {
    pub fn sqlite(path: &str) -> DatabaseConfig {
        DatabaseConfig {
            engine: DatabaseDrivers::sqlite3,
            path: Some(path.to_string()),
            ..Default::default()
        }
    }

    pub fn mysql(host: &str, username: &str, password: &str, database_name: &str) -> DatabaseConfig {
        DatabaseConfig {
            engine: DatabaseDrivers::mysql,
            path: None,
            host: Some(host.to_string()),
            port: Some(MYSQL_DEFAULT_PORT),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            database_name: Some(database_name.to_string()),
            options: BTreeMap::new(),
        }
    }

    pub fn with_port(mut self, port: u16) -> DatabaseConfig {
        self.port = Some(port);
        self
    }

    /// Extra driver option, passed through unmodified.
    pub fn with_option(mut self, key: &str, value: &str) -> DatabaseConfig {
        self.options.insert(key.to_string(), value.to_string());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self.engine {
            DatabaseDrivers::sqlite3 => {
                match self.path.as_deref() {
                    Some(path) if !path.trim().is_empty() => Ok(()),
                    _ => Err(ConfigurationError::ValidationError(String::from("[DB: sqlite3] a database path is required"))),
                }
            }
            DatabaseDrivers::mysql => {
                let check_map = vec![
                    ("[DB: mysql] host", self.host.as_deref()),
                    ("[DB: mysql] username", self.username.as_deref()),
                    ("[DB: mysql] database_name", self.database_name.as_deref()),
                ];
                for (name, value) in check_map {
                    match value {
                        Some(value) if !value.trim().is_empty() => {}
                        _ => return Err(ConfigurationError::ValidationError(format!("{} is required", name))),
                    }
                }
                Self::validate_value("[DB: mysql] database_name", self.database_name.as_deref().unwrap_or_default())
            }
        }
    }

    pub fn validate_value(name: &str, value: &str) -> Result<(), ConfigurationError> {
        if !QueryBuilder::is_valid_identifier(value) {
            return Err(ConfigurationError::ValidationError(format!("{} [:] Name: \"{}\" is not a valid identifier", name, value)));
        }
        Ok(())
    }

    /// `host:port` of the MySQL server, without credentials.
    pub fn mysql_endpoint(&self) -> String {
        format!(
            "{}:{}",
            self.host.as_deref().unwrap_or("localhost"),
            self.port.unwrap_or(MYSQL_DEFAULT_PORT)
        )
    }

    /// Connection URL understood by the MySQL driver. `options` become query
    /// parameters. Without `with_database` no schema is selected.
    pub fn mysql_dsn(&self, with_database: bool) -> Result<String, ConfigurationError> {
        if self.engine != DatabaseDrivers::mysql {
            return Err(ConfigurationError::ValidationError(format!("a MySQL URL was requested for engine {}", self.engine)));
        }
        let encode = |value: &str| utf8_percent_encode(value, NON_ALPHANUMERIC).to_string();
        let mut dsn = format!("mysql://{}", encode(self.username.as_deref().unwrap_or_default()));
        if let Some(password) = self.password.as_deref().filter(|password| !password.is_empty()) {
            dsn.push_str(&format!(":{}", encode(password)));
        }
        dsn.push_str(&format!("@{}", self.mysql_endpoint()));
        if with_database
            && let Some(database_name) = self.database_name.as_deref() {
                dsn.push_str(&format!("/{}", encode(database_name)));
            }
        if !self.options.is_empty() {
            let query = self
                .options
                .iter()
                .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
                .collect::<Vec<String>>()
                .join("&");
            dsn.push_str(&format!("?{}", query));
        }
        Ok(dsn)
    }
}
