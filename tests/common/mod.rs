#![allow(dead_code)]
use std::collections::HashSet;
use std::sync::Arc;
use async_trait::async_trait;
use parking_lot::Mutex;
use db_injector::config::structs::injector_config::InjectorConfig;
use db_injector::database::enums::database_drivers::DatabaseDrivers;
use db_injector::database::errors::InjectorError;
use db_injector::database::structs::database_connector::DatabaseConnector;
use db_injector::database::structs::injection_row::InjectionRow;
use db_injector::database::structs::memory_sink::MemorySink;
use db_injector::database::traits::injection_engine::InjectionEngine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Ping(Option<String>),
    Open,
    DatabaseExists(String),
    TableExists(String, String),
    Drop(String, String),
    Create(String, String),
    Insert(String, i64),
    Close,
}

pub type OpLog = Arc<Mutex<Vec<Op>>>;

/// In-memory engine recording every call it receives.
#[derive(Debug, Default)]
pub struct FakeEngine {
    pub driver: Option<DatabaseDrivers>,
    pub ops: OpLog,
    pub existing_tables: HashSet<String>,
    pub missing_databases: HashSet<String>,
    pub fail_ping: bool,
    pub fail_ping_on: Option<String>,
    pub fail_create: bool,
    pub fail_insert: Option<(String, i64)>,
    pub lose_connection_at: Option<i64>,
}

impl FakeEngine {
    pub fn new(driver: DatabaseDrivers) -> FakeEngine {
        FakeEngine {
            driver: Some(driver),
            ..FakeEngine::default()
        }
    }

    pub fn with_existing_table(mut self, database: &str) -> FakeEngine {
        self.existing_tables.insert(database.to_string());
        self
    }

    pub fn with_missing_database(mut self, database: &str) -> FakeEngine {
        self.missing_databases.insert(database.to_string());
        self
    }

    pub fn with_failing_insert(mut self, database: &str, cycle: i64) -> FakeEngine {
        self.fail_insert = Some((database.to_string(), cycle));
        self
    }

    pub fn with_failing_ping(mut self, database: &str) -> FakeEngine {
        self.fail_ping_on = Some(database.to_string());
        self
    }

    fn record(&self, op: Op) {
        self.ops.lock().push(op);
    }
}

#[async_trait]
impl InjectionEngine for FakeEngine {
    fn driver(&self) -> DatabaseDrivers {
        self.driver.unwrap_or(DatabaseDrivers::mysql)
    }

    fn ping_targets(&self, config: &InjectorConfig) -> Vec<Option<String>> {
        match self.driver() {
            DatabaseDrivers::mongodb => vec![None],
            _ => config.databases.iter().cloned().map(Some).collect(),
        }
    }

    async fn ping(&mut self, config: &InjectorConfig, target: Option<&str>) -> Result<(), InjectorError> {
        self.record(Op::Ping(target.map(String::from)));
        let refused = self.fail_ping || (target.is_some() && self.fail_ping_on.as_deref() == target);
        match refused {
            true => Err(InjectorError::connection("fake endpoint", &config.host, "connection refused")),
            false => Ok(()),
        }
    }

    async fn open(&mut self, _config: &InjectorConfig) -> Result<(), InjectorError> {
        self.record(Op::Open);
        Ok(())
    }

    async fn database_exists(&mut self, database: &str) -> Result<bool, InjectorError> {
        self.record(Op::DatabaseExists(database.to_string()));
        Ok(!self.missing_databases.contains(database))
    }

    async fn table_exists(&mut self, database: &str, table: &str) -> Result<bool, InjectorError> {
        self.record(Op::TableExists(database.to_string(), table.to_string()));
        Ok(self.existing_tables.contains(database))
    }

    async fn drop_table(&mut self, database: &str, table: &str) -> Result<(), InjectorError> {
        self.record(Op::Drop(database.to_string(), table.to_string()));
        self.existing_tables.remove(database);
        Ok(())
    }

    async fn create_table(&mut self, database: &str, table: &str) -> Result<(), InjectorError> {
        self.record(Op::Create(database.to_string(), table.to_string()));
        match self.fail_create {
            true => Err(InjectorError::provisioning("create", database, table, "permission denied")),
            false => {
                self.existing_tables.insert(database.to_string());
                Ok(())
            }
        }
    }

    async fn insert(&mut self, database: &str, table: &str, row: &InjectionRow) -> Result<(), InjectorError> {
        self.record(Op::Insert(database.to_string(), row.cycle));
        if self.lose_connection_at == Some(row.cycle) {
            return Err(InjectorError::connection("fake endpoint", "127.0.0.1:1", "connection reset"));
        }
        match &self.fail_insert {
            Some((failing, cycle)) if failing == database && *cycle == row.cycle => {
                Err(InjectorError::write(database, table, "duplicate key"))
            }
            _ => Ok(()),
        }
    }

    async fn close(&mut self) {
        self.record(Op::Close);
    }
}

pub fn create_test_config(provider: &str, databases: &[&str], num_loops: u64, overwrite: bool) -> InjectorConfig {
    let mut config = InjectorConfig::init();
    config.provider = provider.to_string();
    config.host = "127.0.0.1:1".to_string();
    config.databases = databases.iter().map(|database| database.to_string()).collect();
    config.num_loops = num_loops;
    config.overwrite = overwrite;
    config.interval_ms = 0;
    config
}

/// Builds a connector around `engine`, returning the shared op log and sink.
pub fn create_test_connector(engine: FakeEngine) -> (DatabaseConnector<FakeEngine>, OpLog, Arc<MemorySink>) {
    let ops = engine.ops.clone();
    let sink = Arc::new(MemorySink::new());
    let connector = DatabaseConnector::new(engine, sink.clone());
    (connector, ops, sink)
}

pub fn inserts(ops: &OpLog) -> Vec<(String, i64)> {
    ops.lock()
        .iter()
        .filter_map(|op| match op {
            Op::Insert(database, cycle) => Some((database.clone(), *cycle)),
            _ => None,
        })
        .collect()
}

pub fn count(ops: &OpLog, matcher: fn(&Op) -> bool) -> usize {
    ops.lock().iter().filter(|op| matcher(op)).count()
}
