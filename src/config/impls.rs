//! Implementation blocks for configuration types.

pub mod configuration_error;
pub mod injector_config;
