use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{ConnectOptions, Connection, Error, MySqlConnection};
use crate::config::structs::injector_config::InjectorConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_dialect::SqlDialect;
use crate::database::errors::InjectorError;
use crate::database::helpers::{connection_url, create_table_statement, drop_table_statement, insert_statement, table_exists_statement};
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::injection_row::InjectionRow;
use crate::database::traits::injection_engine::InjectionEngine;

impl DatabaseConnectorMySQL {
    pub fn new() -> DatabaseConnectorMySQL {
        DatabaseConnectorMySQL::default()
    }

    #[tracing::instrument(level = "debug", skip(dsl))]
    pub async fn create(dsl: &str) -> Result<MySqlConnection, Error>
    {
        MySqlConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1))
            .connect()
            .await
    }

    async fn open_database(config: &InjectorConfig, database: &str) -> Result<MySqlConnection, InjectorError>
    {
        let dsl = connection_url(DatabaseDrivers::mysql, &config.username, &config.password, &config.host, Some(database));
        DatabaseConnectorMySQL::create(&dsl)
            .await
            .map_err(|error| InjectorError::connection(&format!("mysql database {}", database), &config.host, error))
    }

    fn connection(&mut self, database: &str) -> Result<&mut MySqlConnection, InjectorError>
    {
        self.connections
            .get_mut(database)
            .ok_or_else(|| InjectorError::connection(&format!("mysql database {}", database), &self.host, "connection is not open"))
    }
}

#[async_trait]
impl InjectionEngine for DatabaseConnectorMySQL {
    fn driver(&self) -> DatabaseDrivers {
        DatabaseDrivers::mysql
    }

    async fn ping(&mut self, config: &InjectorConfig, target: Option<&str>) -> Result<(), InjectorError>
    {
        let Some(database) = target else {
            return Err(InjectorError::NoDatabaseSpecified);
        };
        let mut connection = DatabaseConnectorMySQL::open_database(config, database).await?;
        let pinged = connection
            .ping()
            .await
            .map_err(|error| InjectorError::connection(&format!("mysql database {}", database), &config.host, error));
        let _ = connection.close().await;
        pinged
    }

    async fn open(&mut self, config: &InjectorConfig) -> Result<(), InjectorError>
    {
        self.host = config.host.clone();
        for database in &config.databases {
            let connection = DatabaseConnectorMySQL::open_database(config, database).await?;
            self.connections.insert(database.clone(), connection);
        }
        Ok(())
    }

    async fn table_exists(&mut self, database: &str, table: &str) -> Result<bool, InjectorError>
    {
        let connection = self.connection(database)?;
        let count: i64 = sqlx::query_scalar(table_exists_statement(SqlDialect::mysql))
            .bind(table)
            .fetch_one(&mut *connection)
            .await
            .map_err(|error| InjectorError::provisioning("inspect", database, table, error))?;
        Ok(count > 0)
    }

    async fn drop_table(&mut self, database: &str, table: &str) -> Result<(), InjectorError>
    {
        let statement = drop_table_statement(SqlDialect::mysql, table);
        let connection = self.connection(database)?;
        sqlx::query(&statement)
            .execute(&mut *connection)
            .await
            .map_err(|error| InjectorError::provisioning("drop", database, table, error))?;
        Ok(())
    }

    async fn create_table(&mut self, database: &str, table: &str) -> Result<(), InjectorError>
    {
        let statement = create_table_statement(SqlDialect::mysql, table);
        let connection = self.connection(database)?;
        sqlx::query(&statement)
            .execute(&mut *connection)
            .await
            .map_err(|error| InjectorError::provisioning("create", database, table, error))?;
        Ok(())
    }

    async fn insert(&mut self, database: &str, table: &str, _row: &InjectionRow) -> Result<(), InjectorError>
    {
        let statement = insert_statement(SqlDialect::mysql, table);
        let connection = self.connection(database).map_err(|error| InjectorError::write(database, table, error))?;
        sqlx::query(&statement)
            .execute(&mut *connection)
            .await
            .map_err(|error| InjectorError::write(database, table, error))?;
        Ok(())
    }

    async fn close(&mut self)
    {
        while let Some((_, connection)) = self.connections.pop_first() {
            let _ = connection.close().await;
        }
    }
}
