use std::sync::Arc;
use futures_util::future::BoxFuture;
use log::warn;
use crate::database::errors::DatabaseError;
use crate::database::structs::connector_lock::ConnectorLock;
use crate::database::traits::connection_factory::ConnectionFactory;

impl ConnectorLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `operation` on a freshly opened connection while holding the lock.
    ///
    /// The connection is closed and the lock released before this returns,
    /// whatever the operation's outcome. A failure to open is returned as is.
    /// When both the operation and the close fail, the operation's error wins.
    pub async fn run<F, T, Op>(&self, factory: &F, operation: Op) -> Result<T, DatabaseError>
    where
        F: ConnectionFactory,
        T: Send,
        Op: for<'c> FnOnce(&'c mut F::Connection) -> BoxFuture<'c, Result<T, DatabaseError>> + Send,
    {
        let _guard = self.mutex.lock().await;
        let mut connection = factory.open().await?;
        let result = operation(&mut connection).await;
        let closed = factory.close(connection).await;
        match (result, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(error)) => Err(error),
            (Err(error), Ok(())) => Err(error),
            (Err(error), Err(close_error)) => {
                warn!("Closing the connection after a failed statement also failed: {}", close_error);
                Err(error)
            }
        }
    }

    /// Whether a call currently holds this lock.
    pub fn is_locked(&self) -> bool {
        self.mutex.try_lock().is_err()
    }

    /// Whether both handles guard the same logical connector.
    pub fn shares_with(&self, other: &ConnectorLock) -> bool {
        Arc::ptr_eq(&self.mutex, &other.mutex)
    }
}
