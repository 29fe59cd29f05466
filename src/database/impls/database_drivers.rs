use std::fmt;
use std::str::FromStr;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::InjectorError;

impl DatabaseDrivers {
    pub const ALL: [DatabaseDrivers; 3] = [
        DatabaseDrivers::mysql,
        DatabaseDrivers::postgres,
        DatabaseDrivers::mongodb,
    ];

    /// Case-insensitive lookup of a provider name.
    pub fn from_provider(provider: &str) -> Option<DatabaseDrivers> {
        Self::ALL.into_iter().find(|driver| driver.name().eq_ignore_ascii_case(provider))
    }

    pub fn name(&self) -> &'static str {
        match self {
            DatabaseDrivers::mysql => "mysql",
            DatabaseDrivers::postgres => "postgres",
            DatabaseDrivers::mongodb => "mongodb",
        }
    }

    /// Prefix used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseDrivers::mysql => "MySQL",
            DatabaseDrivers::postgres => "PgSQL",
            DatabaseDrivers::mongodb => "MongoDB",
        }
    }

    pub fn url_scheme(&self) -> &'static str {
        match self {
            DatabaseDrivers::mysql => "mysql://",
            DatabaseDrivers::postgres => "postgres://",
            DatabaseDrivers::mongodb => "mongodb://",
        }
    }
}

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DatabaseDrivers {
    type Err = InjectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatabaseDrivers::from_provider(s).ok_or_else(|| InjectorError::UnsupportedProvider(s.to_string()))
    }
}
