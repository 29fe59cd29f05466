//! Database connector structures.

/// Driver manager selecting and owning one engine adapter.
pub mod database_manager;

/// Engine-agnostic adapter running the injection lifecycle.
pub mod database_connector;

/// MySQL/MariaDB-specific engine implementation.
pub mod database_connector_mysql;

/// PostgreSQL-specific engine implementation.
pub mod database_connector_pgsql;

/// MongoDB-specific engine implementation.
pub mod database_connector_mongodb;

/// Payload written once per database per cycle.
pub mod injection_row;

/// Event sink forwarding to the `log` facade.
pub mod log_sink;

/// Event sink keeping events in memory.
pub mod memory_sink;
