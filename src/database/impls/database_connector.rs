use std::sync::Arc;
use async_trait::async_trait;
use crate::config::structs::injector_config::InjectorConfig;
use crate::database::enums::adapter_state::AdapterState;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::InjectorError;
use crate::database::helpers::redacted_url;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::injection_row::InjectionRow;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::database::traits::event_sink::EventSink;
use crate::database::traits::injection_engine::InjectionEngine;

impl<E: InjectionEngine> DatabaseConnector<E> {
    pub fn new(engine: E, sink: Arc<dyn EventSink>) -> DatabaseConnector<E> {
        DatabaseConnector {
            engine,
            config: None,
            sink,
            state: AdapterState::Uninitialized,
        }
    }

    pub fn config(&self) -> Option<&InjectorConfig> {
        self.config.as_ref()
    }

    fn label(&self) -> &'static str {
        self.engine.driver().label()
    }

    fn checked_config(&self) -> Result<InjectorConfig, InjectorError> {
        let config = self.config.clone().ok_or(InjectorError::NotInitialized)?;
        config.validate()?;
        Ok(config)
    }

    fn fail(&mut self, error: InjectorError) -> InjectorError {
        self.sink.error(&format!("[{}] {}", self.label(), error));
        self.state = AdapterState::Failed;
        error
    }

    /// Makes sure the table exists in every target database.
    ///
    /// An existing table is kept when overwrite is off, and provisioning stops
    /// there without looking at the remaining databases.
    pub(crate) async fn provision(&mut self, config: &InjectorConfig) -> Result<(), InjectorError> {
        let label = self.label();
        let table = config.table_name.as_str();
        for database in &config.databases {
            if !self.engine.database_exists(database).await? {
                return Err(InjectorError::DatabaseNotFound(database.clone()));
            }
            if self.engine.table_exists(database, table).await? {
                if !config.overwrite {
                    self.sink.info(&format!("[{}] continue using existing table {} in {}", label, table, database));
                    return Ok(());
                }
                self.sink.info(&format!("[{}] dropping table {} in {}", label, table, database));
                self.engine.drop_table(database, table).await?;
            }
            self.sink.info(&format!("[{}] creating table {} in {}", label, table, database));
            self.engine.create_table(database, table).await?;
        }
        Ok(())
    }

    /// Write loop. A failed write is reported and skipped; any other error
    /// from the engine ends the run.
    pub(crate) async fn run_cycles(&mut self, config: &InjectorConfig) -> Result<(), InjectorError> {
        let label = self.label();
        let bound = config.cycle_bound();
        let interval = config.interval();
        self.sink.info(&format!("[{}] total cycle is: {}", label, bound));
        for cycle in 0..bound.limit() {
            let row = InjectionRow::now(cycle);
            for database in &config.databases {
                match self.engine.insert(database, &config.table_name, &row).await {
                    Err(error) if error.is_fatal() => return Err(error),
                    Err(error) => self.sink.error(&format!("[{}] loop {}: {}", label, cycle, error)),
                    Ok(()) => {}
                }
            }
            self.sink.info(&format!("[{}] loop {}: {}", label, cycle, row.timestamp));
            if !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
        }
        Ok(())
    }

    async fn run(&mut self, config: &InjectorConfig) -> Result<(), InjectorError> {
        self.engine.open(config).await?;
        self.provision(config).await?;
        self.run_cycles(config).await
    }
}

#[async_trait]
impl<E: InjectionEngine> DatabaseBackend for DatabaseConnector<E> {
    fn driver(&self) -> DatabaseDrivers {
        self.engine.driver()
    }

    fn state(&self) -> AdapterState {
        self.state
    }

    fn init(&mut self, config: InjectorConfig) -> Result<(), InjectorError> {
        let validation = config.validate();
        self.config = Some(config);
        match validation {
            Ok(()) => {
                self.state = AdapterState::Initialized;
                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn connect(&mut self) -> Result<(), InjectorError> {
        let config = match self.checked_config() {
            Ok(config) => config,
            Err(error) => return Err(self.fail(error)),
        };
        let driver = self.engine.driver();
        for target in self.engine.ping_targets(&config) {
            let url = redacted_url(driver, &config.username, &config.host, target.as_deref());
            self.sink.info(&format!("[{}] connecting to {}", self.label(), url));
            if let Err(error) = self.engine.ping(&config, target.as_deref()).await {
                return Err(self.fail(error));
            }
        }
        self.state = AdapterState::Connected;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn inject(&mut self) -> Result<(), InjectorError> {
        self.connect().await?;
        let config = self.checked_config()?;
        self.state = AdapterState::Injecting;
        self.sink.info(&format!("[{}] inject in progress...", self.label()));
        let result = self.run(&config).await;
        self.engine.close().await;
        match result {
            Ok(()) => {
                self.state = AdapterState::Done;
                self.sink.info(&format!("[{}] injection finished", self.label()));
                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }
}
