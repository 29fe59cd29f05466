//! Implementation blocks for database types.

pub mod adapter_state;
pub mod cycle_bound;
pub mod database_connector;
pub mod database_connector_mongodb;
pub mod database_connector_mysql;
pub mod database_connector_pgsql;
pub mod database_drivers;
pub mod database_manager;
pub mod injection_row;
pub mod log_sink;
pub mod memory_sink;
