use std::collections::BTreeMap;
use std::fmt;
use sqlx::MySqlConnection;

#[derive(Default)]
pub struct DatabaseConnectorMySQL {
    pub(crate) host: String,
    pub(crate) connections: BTreeMap<String, MySqlConnection>,
}

impl fmt::Debug for DatabaseConnectorMySQL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnectorMySQL")
            .field("host", &self.host)
            .field("connections", &self.connections.keys().collect::<Vec<_>>())
            .finish()
    }
}
