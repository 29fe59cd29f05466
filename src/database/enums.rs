//! Database enumeration types.

/// Supported database driver types (mysql, postgres, mongodb).
pub mod database_drivers;

/// SQL flavours of the relational engines.
pub mod sql_dialect;

/// Lifecycle states of an engine adapter.
pub mod adapter_state;

/// Resolved number of injection cycles.
pub mod cycle_bound;

/// Error taxonomy used to split fatal and transient failures.
pub mod error_kind;
