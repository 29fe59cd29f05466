use async_trait::async_trait;
use crate::config::structs::injector_config::InjectorConfig;
use crate::database::enums::adapter_state::AdapterState;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::InjectorError;

#[async_trait]
pub trait DatabaseBackend: Send {
    fn driver(&self) -> DatabaseDrivers;

    fn state(&self) -> AdapterState;

    /// Stores the configuration and validates it in memory. Performs no I/O.
    fn init(&mut self, config: InjectorConfig) -> Result<(), InjectorError>;

    /// Opens, checks and releases a connection to every target.
    async fn connect(&mut self) -> Result<(), InjectorError>;

    /// Connects, provisions the table in every target, then runs the write loop.
    async fn inject(&mut self) -> Result<(), InjectorError>;
}
