use async_trait::async_trait;
use crate::config::structs::injector_config::InjectorConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::InjectorError;
use crate::database::structs::injection_row::InjectionRow;

/// Dialect of one database family.
///
/// `ping` is a pure reachability check of one target from `ping_targets`:
/// whatever it opens it closes again. `open` acquires the handles used by the
/// remaining calls until `close`.
#[async_trait]
pub trait InjectionEngine: Send {
    fn driver(&self) -> DatabaseDrivers;

    /// One target per database by default. `None` stands for the endpoint itself.
    fn ping_targets(&self, config: &InjectorConfig) -> Vec<Option<String>> {
        config.databases.iter().cloned().map(Some).collect()
    }

    async fn ping(&mut self, config: &InjectorConfig, target: Option<&str>) -> Result<(), InjectorError>;

    async fn open(&mut self, config: &InjectorConfig) -> Result<(), InjectorError>;

    /// Relational engines reach a database through its connection, so only
    /// document stores can report a missing one.
    async fn database_exists(&mut self, _database: &str) -> Result<bool, InjectorError> {
        Ok(true)
    }

    async fn table_exists(&mut self, database: &str, table: &str) -> Result<bool, InjectorError>;

    async fn drop_table(&mut self, database: &str, table: &str) -> Result<(), InjectorError>;

    async fn create_table(&mut self, database: &str, table: &str) -> Result<(), InjectorError>;

    async fn insert(&mut self, database: &str, table: &str, row: &InjectionRow) -> Result<(), InjectorError>;

    async fn close(&mut self);
}
