//! Configuration management module.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command line flags. Every field has a default, so a file only needs the
//! values it changes.
//!
//! # Example
//!
//! ```toml
//! log_level = "info"
//! provider = "postgres"
//! host = "127.0.0.1:5432"
//! username = "postgres"
//! password = "secret"
//! databases = ["db1", "db2"]
//! table_name = "injection_table"
//! overwrite = true
//! num_loops = 0
//! interval_ms = 1000
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
