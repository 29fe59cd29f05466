//! # db-injector
//!
//! A load injector that keeps writing timestamped rows into MySQL, PostgreSQL
//! or MongoDB so operators can watch replication, failover or backup behaviour
//! under a steady write stream.
//!
//! ## Overview
//!
//! One adapter is chosen from the configured provider name. It is then driven
//! through three steps:
//!
//! 1. `init` stores and checks the configuration without touching the network
//! 2. `connect` proves every target database is reachable
//! 3. `inject` provisions the target table in each database and runs the
//!    timed insert loop
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use db_injector::config::structs::injector_config::InjectorConfig;
//! use db_injector::database::structs::database_manager::DatabaseManager;
//! use db_injector::database::structs::log_sink::LogSink;
//!
//! let mut config = InjectorConfig::init();
//! config.provider = String::from("postgres");
//! config.host = String::from("127.0.0.1:5432");
//! config.databases = vec![String::from("app")];
//! config.num_loops = 10;
//!
//! let mut manager = DatabaseManager::new(&config, Arc::new(LogSink))?;
//! manager.inject().await?;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Engine adapters, provisioning and the insert loop
//! - [`logging`] - fern based log output
//! - [`structs`] - CLI argument parsing

/// Configuration management module.
///
/// Loads settings from an optional TOML file and layers the command line
/// flags on top.
pub mod config;

/// Database adapters for MySQL, PostgreSQL and MongoDB.
///
/// Holds the adapter lifecycle, table provisioning, the insert loop and the
/// event sinks that receive its output.
pub mod database;

/// Logging setup.
pub mod logging;

/// CLI argument parsing.
pub mod structs;
