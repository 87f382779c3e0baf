//! Implementation blocks for database connectors and helper types.

pub mod connector_lock;
pub mod database_connector;
pub mod database_connector_mysql;
pub mod database_connector_sqlite;
pub mod database_drivers;
pub mod order_direction;
pub mod query_builder;
pub mod select_options;
pub mod sql_value;
