//! # database-helper
//!
//! Uniform, serialized CRUD calls over an embedded SQLite file or a MySQL
//! server.
//!
//! ## Overview
//!
//! Every connector exposes the same four operations (`execute_sql`, `insert`,
//! `select`, `update`) plus `execute_many` for bulk statements. Each call
//! takes the connector's own lock, opens a brand new connection, runs its
//! statement, commits, closes the connection and only then returns. There is
//! no pooling and nothing is cached between calls.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use database_helper::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
//! use database_helper::database::traits::database_backend::DatabaseBackend;
//! use database_helper::database::enums::sql_value::SqlValue;
//!
//! let db = DatabaseConnectorSQLite::new("example.db");
//! db.execute_sql("CREATE TABLE t (id INTEGER PRIMARY KEY, v TEXT)", &[]).await?;
//! let id = db.insert("t", &[("v", SqlValue::from("a"))]).await?;
//! let rows = db.select("t", &["v"], Some(("id", SqlValue::from(id)))).await?;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - TOML configuration for connectors and logging
//! - [`database`] - SQLite and MySQL connectors, the backend trait and the lock
//! - [`logging`] - fern based log dispatcher

/// Configuration management module.
///
/// Handles loading, saving and validating connector settings from TOML files.
pub mod config;

/// Database backend module.
///
/// Provides the `DatabaseBackend` trait, the SQLite and MySQL connectors, the
/// per-connector lock and the identifier-checking query builder.
pub mod database;

/// Logging setup.
pub mod logging;
