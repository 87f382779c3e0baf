//! Configuration management module.
//!
//! Loads, validates and saves the connector configuration from TOML files.
//!
//! # Configuration Structure
//!
//! ```toml
//! log_level = "info"
//!
//! [database]
//! engine = "mysql"
//! host = "127.0.0.1"
//! port = 3306
//! username = "root"
//! password = "secret"
//! database_name = "example"
//!
//! [database.options]
//! ssl-mode = "disabled"
//! ```
//!
//! For `engine = "sqlite3"` only `path` is needed. Entries under
//! `[database.options]` are handed to the MySQL driver untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use database_helper::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
