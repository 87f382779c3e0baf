use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct ConnectorLock {
    pub(crate) mutex: Arc<Mutex<()>>,
}
