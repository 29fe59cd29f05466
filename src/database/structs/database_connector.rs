use std::sync::Arc;
use crate::config::structs::injector_config::InjectorConfig;
use crate::database::enums::adapter_state::AdapterState;
use crate::database::traits::event_sink::EventSink;
use crate::database::traits::injection_engine::InjectionEngine;

pub struct DatabaseConnector<E: InjectionEngine> {
    pub(crate) engine: E,
    pub(crate) config: Option<InjectorConfig>,
    pub(crate) sink: Arc<dyn EventSink>,
    pub(crate) state: AdapterState,
}
