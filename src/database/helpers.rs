use chrono::{DateTime, TimeZone};
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_dialect::SqlDialect;

pub const DEFAULT_TABLE_NAME: &str = "injection_table";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static TABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$").expect("static table name pattern")
});

pub fn is_valid_table_name(name: &str) -> bool {
    TABLE_NAME.is_match(name)
}

pub fn quote_identifier(dialect: SqlDialect, identifier: &str) -> String {
    match dialect {
        SqlDialect::mysql => format!("`{}`", identifier),
        SqlDialect::postgres => format!("\"{}\"", identifier),
    }
}

/// Counts tables named by the single bound parameter in the connection's current database.
pub fn table_exists_statement(dialect: SqlDialect) -> &'static str {
    match dialect {
        SqlDialect::mysql => {
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = DATABASE() AND table_name = ?"
        }
        SqlDialect::postgres => {
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = current_schema() AND table_name = $1"
        }
    }
}

pub fn create_table_statement(dialect: SqlDialect, table: &str) -> String {
    match dialect {
        SqlDialect::mysql => format!(
            "CREATE TABLE {} (`id` BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY, `insert_time` TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP)",
            quote_identifier(dialect, table)
        ),
        SqlDialect::postgres => format!(
            "CREATE TABLE {} (id BIGINT NOT NULL PRIMARY KEY, insert_time TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP)",
            quote_identifier(dialect, table)
        ),
    }
}

pub fn drop_table_statement(dialect: SqlDialect, table: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", quote_identifier(dialect, table))
}

pub fn insert_statement(dialect: SqlDialect, table: &str) -> String {
    match dialect {
        SqlDialect::mysql => format!("INSERT INTO {} () VALUES ()", quote_identifier(dialect, table)),
        SqlDialect::postgres => format!("INSERT INTO {} (id) VALUES ($1)", quote_identifier(dialect, table)),
    }
}

pub fn encode_url_component(value: &str) -> String {
    utf8_percent_encode(value, USERINFO).to_string()
}

/// Builds the URL handed to the native client. MongoDB connects to the
/// endpoint as a whole, so `database` is ignored for it. Without a database
/// the URL stops at the host.
pub fn connection_url(
    engine: DatabaseDrivers,
    username: &str,
    password: &str,
    host: &str,
    database: Option<&str>,
) -> String {
    let userinfo = match (username.is_empty(), password.is_empty()) {
        (true, _) => String::new(),
        (false, true) => format!("{}@", encode_url_component(username)),
        (false, false) => format!("{}:{}@", encode_url_component(username), encode_url_component(password)),
    };
    build_url(engine, &userinfo, host, database)
}

/// Same as [`connection_url`] with the password masked, for log output.
pub fn redacted_url(engine: DatabaseDrivers, username: &str, host: &str, database: Option<&str>) -> String {
    let userinfo = match username.is_empty() {
        true => String::new(),
        false => format!("{}:***@", encode_url_component(username)),
    };
    build_url(engine, &userinfo, host, database)
}

fn build_url(engine: DatabaseDrivers, userinfo: &str, host: &str, database: Option<&str>) -> String {
    let base = format!("{}{}{}", engine.url_scheme(), userinfo, host);
    match (engine, database) {
        (DatabaseDrivers::mongodb, _) | (_, None) => base,
        (DatabaseDrivers::mysql, Some(database)) => format!("{}/{}", base, encode_url_component(database)),
        (DatabaseDrivers::postgres, Some(database)) => {
            format!("{}/{}?sslmode=disable", base, encode_url_component(database))
        }
    }
}

pub fn format_timestamp<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}
