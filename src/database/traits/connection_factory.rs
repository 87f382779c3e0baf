use async_trait::async_trait;
use crate::database::errors::DatabaseError;

/// Produces a fresh connection for every call and tears it down afterwards.
#[async_trait]
pub trait ConnectionFactory: Send + Sync {
    type Connection: Send;

    async fn open(&self) -> Result<Self::Connection, DatabaseError>;

    async fn close(&self, connection: Self::Connection) -> Result<(), DatabaseError>;
}
