use std::fmt;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::sqlite3 => write!(f, "sqlite3"),
            DatabaseDrivers::mysql => write!(f, "mysql"),
        }
    }
}

impl DatabaseDrivers {
    pub fn engine_name(&self) -> &'static str {
        match self {
            DatabaseDrivers::sqlite3 => "SQLite",
            DatabaseDrivers::mysql => "MySQL",
        }
    }

    pub fn log_prefix(&self) -> &'static str {
        match self {
            DatabaseDrivers::sqlite3 => "[SQLite]",
            DatabaseDrivers::mysql => "[MySQL]",
        }
    }
}
