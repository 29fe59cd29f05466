//! Trait seams of the injector.

/// The `init -> connect -> inject` contract every engine adapter honours.
pub mod database_backend;

/// Engine-specific operations the shared lifecycle drives.
pub mod injection_engine;

/// Destination for cycle and error events.
pub mod event_sink;
