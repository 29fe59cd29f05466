use std::sync::Arc;
use crate::config::structs::injector_config::InjectorConfig;
use crate::database::enums::adapter_state::AdapterState;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::InjectorError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mongodb::DatabaseConnectorMongoDB;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_manager::DatabaseManager;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::database::traits::event_sink::EventSink;

impl DatabaseManager {
    /// Resolves the adapter for `config.provider` and initializes it.
    ///
    /// No adapter is built for an unknown provider. No I/O happens here.
    pub fn new(config: &InjectorConfig, sink: Arc<dyn EventSink>) -> Result<DatabaseManager, InjectorError>
    {
        let driver = match DatabaseDrivers::from_provider(&config.provider) {
            Some(driver) => driver,
            None => {
                let error = InjectorError::UnsupportedProvider(config.provider.clone());
                sink.error(&error.to_string());
                return Err(error);
            }
        };
        DatabaseManager::with_backend(config, DatabaseManager::backend(driver, sink))
    }

    pub fn backend(driver: DatabaseDrivers, sink: Arc<dyn EventSink>) -> Box<dyn DatabaseBackend>
    {
        match driver {
            DatabaseDrivers::mysql => Box::new(DatabaseConnector::new(DatabaseConnectorMySQL::new(), sink)),
            DatabaseDrivers::postgres => Box::new(DatabaseConnector::new(DatabaseConnectorPgSQL::new(), sink)),
            DatabaseDrivers::mongodb => Box::new(DatabaseConnector::new(DatabaseConnectorMongoDB::new(), sink)),
        }
    }

    /// Takes ownership of an already selected adapter and initializes it with `config`.
    pub fn with_backend(config: &InjectorConfig, mut backend: Box<dyn DatabaseBackend>) -> Result<DatabaseManager, InjectorError>
    {
        backend.init(config.clone())?;
        Ok(DatabaseManager {
            backend,
            config: config.clone(),
        })
    }

    pub async fn connect(&mut self) -> Result<(), InjectorError>
    {
        self.backend.connect().await
    }

    pub async fn inject(&mut self) -> Result<(), InjectorError>
    {
        self.backend.inject().await
    }

    pub fn driver(&self) -> DatabaseDrivers {
        self.backend.driver()
    }

    pub fn state(&self) -> AdapterState {
        self.backend.state()
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }
}
