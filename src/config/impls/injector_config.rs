use std::fs::File;
use std::io::Write;
use std::time::Duration;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::injector_config::InjectorConfig;
use crate::database::enums::cycle_bound::CycleBound;
use crate::database::errors::InjectorError;
use crate::database::helpers::{is_valid_table_name, DEFAULT_TABLE_NAME};
use crate::structs::Cli;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const DEFAULT_INTERVAL_MS: u64 = 1000;

impl InjectorConfig {
    pub fn init() -> InjectorConfig {
        InjectorConfig {
            log_level: String::from("info"),
            provider: String::from("mysql"),
            host: String::from("127.0.0.1:3306"),
            username: String::from("root"),
            password: String::new(),
            databases: vec![],
            table_name: String::from(DEFAULT_TABLE_NAME),
            overwrite: true,
            num_loops: 0,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }

    pub fn load(data: &[u8]) -> Result<InjectorConfig, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<InjectorConfig, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn create_template(path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(&InjectorConfig::init()).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Defaults, then the `--config` file if given, then the individual flags.
    pub fn from_cli(args: &Cli) -> Result<InjectorConfig, ConfigurationError> {
        let mut config = match &args.config {
            Some(path) => Self::load_file(path)?,
            None => Self::init(),
        };
        config.apply_cli(args);
        Ok(config)
    }

    pub fn apply_cli(&mut self, args: &Cli) {
        if let Some(provider) = &args.provider {
            self.provider = provider.clone();
        }
        if let Some(endpoint) = &args.endpoint {
            self.host = endpoint.clone();
        }
        if let Some(database) = &args.database {
            self.databases = Self::split_databases(database);
        }
        if let Some(username) = &args.username {
            self.username = username.clone();
        }
        if let Some(password) = &args.password {
            self.password = password.clone();
        }
        if let Some(count) = args.count {
            self.num_loops = count;
        }
        if let Some(overwrite) = args.overwrite {
            self.overwrite = overwrite;
        }
        if let Some(table) = &args.table {
            self.table_name = table.clone();
        }
        if let Some(interval) = args.interval {
            self.interval_ms = interval;
        }
        if let Some(log_level) = &args.log_level {
            self.log_level = log_level.clone();
        }
    }

    /// Splits a comma separated database list, dropping blank entries.
    pub fn split_databases(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }

    /// In-memory checks an adapter runs before any I/O.
    pub fn validate(&self) -> Result<(), InjectorError> {
        if self.databases.is_empty() {
            return Err(InjectorError::NoDatabaseSpecified);
        }
        if !is_valid_table_name(&self.table_name) {
            return Err(InjectorError::InvalidTableName(self.table_name.clone()));
        }
        Ok(())
    }

    pub fn cycle_bound(&self) -> CycleBound {
        CycleBound::from_num_loops(self.num_loops)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for InjectorConfig {
    fn default() -> Self {
        InjectorConfig::init()
    }
}
