use std::collections::BTreeMap;
use std::fmt;
use sqlx::PgConnection;

#[derive(Default)]
pub struct DatabaseConnectorPgSQL {
    pub(crate) host: String,
    pub(crate) connections: BTreeMap<String, PgConnection>,
}

impl fmt::Debug for DatabaseConnectorPgSQL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnectorPgSQL")
            .field("host", &self.host)
            .field("connections", &self.connections.keys().collect::<Vec<_>>())
            .finish()
    }
}
