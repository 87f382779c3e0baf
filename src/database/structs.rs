//! Database connector structures.

/// Per-connector lock serializing every call.
pub mod connector_lock;

/// Main database connector providing unified interface.
pub mod database_connector;

/// SQLite-specific database connector implementation.
pub mod database_connector_sqlite;

/// MySQL/MariaDB-specific database connector implementation.
pub mod database_connector_mysql;

/// Engine-aware SQL text builder.
pub mod query_builder;

/// Optional filter, ordering and limit for selects.
pub mod select_options;
