//! Configuration data structures.

/// Connection, target and cadence settings of one injector run.
pub mod injector_config;
