use crate::config::structs::injector_config::InjectorConfig;
use crate::database::traits::database_backend::DatabaseBackend;

pub struct DatabaseManager {
    pub(crate) backend: Box<dyn DatabaseBackend>,
    pub(crate) config: InjectorConfig,
}
