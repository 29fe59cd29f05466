use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::error::Error;
use mongodb::Client;
use crate::config::structs::injector_config::InjectorConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::InjectorError;
use crate::database::helpers::connection_url;
use crate::database::structs::database_connector_mongodb::DatabaseConnectorMongoDB;
use crate::database::structs::injection_row::InjectionRow;
use crate::database::traits::injection_engine::InjectionEngine;

const ENDPOINT: &str = "mongodb endpoint";

impl DatabaseConnectorMongoDB {
    pub fn new() -> DatabaseConnectorMongoDB {
        DatabaseConnectorMongoDB::default()
    }

    #[tracing::instrument(level = "debug", skip(uri))]
    pub async fn create(uri: &str) -> Result<Client, Error>
    {
        Client::with_uri_str(uri).await
    }

    async fn open_client(config: &InjectorConfig) -> Result<Client, InjectorError>
    {
        let uri = connection_url(DatabaseDrivers::mongodb, &config.username, &config.password, &config.host, None);
        DatabaseConnectorMongoDB::create(&uri)
            .await
            .map_err(|error| InjectorError::connection(ENDPOINT, &config.host, error))
    }

    fn client(&self) -> Result<&Client, InjectorError>
    {
        self.client
            .as_ref()
            .ok_or_else(|| InjectorError::connection(ENDPOINT, &self.host, "client is not open"))
    }
}

#[async_trait]
impl InjectionEngine for DatabaseConnectorMongoDB {
    fn driver(&self) -> DatabaseDrivers {
        DatabaseDrivers::mongodb
    }

    fn ping_targets(&self, _config: &InjectorConfig) -> Vec<Option<String>> {
        vec![None]
    }

    async fn ping(&mut self, config: &InjectorConfig, _target: Option<&str>) -> Result<(), InjectorError>
    {
        let client = DatabaseConnectorMongoDB::open_client(config).await?;
        let listed = client.list_database_names().await;
        client.shutdown().await;
        listed.map_err(|error| InjectorError::connection(ENDPOINT, &config.host, error))?;
        Ok(())
    }

    async fn open(&mut self, config: &InjectorConfig) -> Result<(), InjectorError>
    {
        self.host = config.host.clone();
        self.client = Some(DatabaseConnectorMongoDB::open_client(config).await?);
        Ok(())
    }

    async fn database_exists(&mut self, database: &str) -> Result<bool, InjectorError>
    {
        let names = self.client()?
            .list_database_names()
            .filter(doc! { "name": database })
            .await
            .map_err(|error| InjectorError::provisioning("inspect", database, "databases", error))?;
        Ok(!names.is_empty())
    }

    async fn table_exists(&mut self, database: &str, table: &str) -> Result<bool, InjectorError>
    {
        let names = self.client()?
            .database(database)
            .list_collection_names()
            .filter(doc! { "name": table })
            .await
            .map_err(|error| InjectorError::provisioning("inspect", database, table, error))?;
        Ok(!names.is_empty())
    }

    async fn drop_table(&mut self, database: &str, table: &str) -> Result<(), InjectorError>
    {
        self.client()?
            .database(database)
            .collection::<Document>(table)
            .drop()
            .await
            .map_err(|error| InjectorError::provisioning("drop", database, table, error))
    }

    async fn create_table(&mut self, database: &str, table: &str) -> Result<(), InjectorError>
    {
        self.client()?
            .database(database)
            .create_collection(table)
            .await
            .map_err(|error| InjectorError::provisioning("create", database, table, error))
    }

    async fn insert(&mut self, database: &str, table: &str, row: &InjectionRow) -> Result<(), InjectorError>
    {
        let client = self.client().map_err(|error| InjectorError::write(database, table, error))?;
        client
            .database(database)
            .collection::<InjectionRow>(table)
            .insert_one(row)
            .await
            .map_err(|error| InjectorError::write(database, table, error))?;
        Ok(())
    }

    async fn close(&mut self)
    {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
        }
    }
}
