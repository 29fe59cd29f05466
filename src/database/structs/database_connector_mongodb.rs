use mongodb::Client;

#[derive(Debug, Clone, Default)]
pub struct DatabaseConnectorMongoDB {
    pub(crate) host: String,
    pub(crate) client: Option<Client>,
}
