//! Database driver layer.
//!
//! A [`DatabaseManager`](structs::database_manager::DatabaseManager) picks one
//! engine adapter from the configured provider name and drives it through the
//! `init -> connect -> inject` lifecycle.
//!
//! # Supported Engines
//!
//! - **MySQL/MariaDB**: auto-increment `id`, parameterless inserts
//! - **PostgreSQL**: `id` set to the cycle index
//! - **MongoDB**: one `{loop, timestamp}` document per cycle
//!
//! # Architecture
//!
//! - `DatabaseBackend` trait is the adapter contract the manager calls
//! - `DatabaseConnector<E>` runs provisioning and the write loop for any engine
//! - `InjectionEngine` trait holds what differs per engine (statements, client calls)
//! - `EventSink` trait receives every cycle and error event
//!
//! Provisioning and connectivity failures abort a run. A failed write is logged
//! and the loop moves on.

/// Database enumeration types.
pub mod enums;

/// Error types for injector operations.
pub mod errors;

/// Statement builders and connection string helpers per engine.
pub mod helpers;

/// Implementation blocks for database connectors.
pub mod impls;

/// Data structures for database connectors.
pub mod structs;

/// Adapter, engine and sink trait definitions.
pub mod traits;

#[cfg(test)]
mod tests;
