//! Database enumeration types.

/// Supported database driver types (sqlite3, mysql).
pub mod database_drivers;

/// Sort direction for `ORDER BY` clauses.
pub mod order_direction;

/// Typed values bound to, and decoded from, statements.
pub mod sql_value;
