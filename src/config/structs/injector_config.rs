use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InjectorConfig {
    pub log_level: String,
    pub provider: String,
    pub host: String,
    pub username: String,
    pub password: String,
    pub databases: Vec<String>,
    pub table_name: String,
    pub overwrite: bool,
    pub num_loops: u64,
    pub interval_ms: u64,
}

impl fmt::Debug for InjectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectorConfig")
            .field("log_level", &self.log_level)
            .field("provider", &self.provider)
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("databases", &self.databases)
            .field("table_name", &self.table_name)
            .field("overwrite", &self.overwrite)
            .field("num_loops", &self.num_loops)
            .field("interval_ms", &self.interval_ms)
            .finish()
    }
}
