use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Statement error: {0}")]
    StatementError(#[source] sqlx::Error),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// The driver error behind a connection or statement failure.
    pub fn driver_error(&self) -> Option<&sqlx::Error> {
        match self {
            DatabaseError::ConnectionError(error) | DatabaseError::StatementError(error) => Some(error),
            _ => None,
        }
    }

    /// The message reported by the database engine itself, when there is one.
    pub fn database_message(&self) -> Option<&str> {
        self.driver_error()
            .and_then(|error| error.as_database_error())
            .map(|error| error.message())
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, DatabaseError::ConnectionError(_))
    }

    pub fn is_statement_error(&self) -> bool {
        matches!(self, DatabaseError::StatementError(_))
    }
}
