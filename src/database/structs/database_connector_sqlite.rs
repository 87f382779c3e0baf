use std::path::PathBuf;
use crate::database::structs::connector_lock::ConnectorLock;

#[derive(Debug, Clone)]
pub struct DatabaseConnectorSQLite {
    pub(crate) path: PathBuf,
    pub(crate) lock: ConnectorLock,
}
