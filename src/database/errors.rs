use thiserror::Error;
use crate::database::enums::error_kind::ErrorKind;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum InjectorError {
    #[error("provider type {0} is not supported")]
    UnsupportedProvider(String),

    #[error("no database specified")]
    NoDatabaseSpecified,

    #[error("invalid table name: {0:?}")]
    InvalidTableName(String),

    #[error("adapter used before init")]
    NotInitialized,

    #[error("cannot access {target} in {host}: {source}")]
    Connection {
        target: String,
        host: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to find database {0}")]
    DatabaseNotFound(String),

    #[error("failed to {action} {table} in database {database}: {source}")]
    Provisioning {
        action: &'static str,
        database: String,
        table: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to insert into {table} in database {database}: {source}")]
    Write {
        database: String,
        table: String,
        #[source]
        source: BoxError,
    },
}

impl InjectorError {
    pub fn connection(target: &str, host: &str, source: impl Into<BoxError>) -> Self {
        InjectorError::Connection {
            target: target.to_string(),
            host: host.to_string(),
            source: source.into(),
        }
    }

    pub fn provisioning(action: &'static str, database: &str, table: &str, source: impl Into<BoxError>) -> Self {
        InjectorError::Provisioning {
            action,
            database: database.to_string(),
            table: table.to_string(),
            source: source.into(),
        }
    }

    pub fn write(database: &str, table: &str, source: impl Into<BoxError>) -> Self {
        InjectorError::Write {
            database: database.to_string(),
            table: table.to_string(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            InjectorError::UnsupportedProvider(_)
            | InjectorError::NoDatabaseSpecified
            | InjectorError::InvalidTableName(_)
            | InjectorError::NotInitialized => ErrorKind::Configuration,
            InjectorError::Connection { .. } => ErrorKind::Connectivity,
            InjectorError::DatabaseNotFound(_)
            | InjectorError::Provisioning { .. } => ErrorKind::Provisioning,
            InjectorError::Write { .. } => ErrorKind::TransientWrite,
        }
    }

    /// Everything but a single failed write aborts the run.
    pub fn is_fatal(&self) -> bool {
        self.kind() != ErrorKind::TransientWrite
    }
}
