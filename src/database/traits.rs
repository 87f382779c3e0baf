//! Database trait definitions.

/// Open/close seam used by the connector lock.
pub mod connection_factory;

/// The CRUD capability every connector exposes.
pub mod database_backend;
