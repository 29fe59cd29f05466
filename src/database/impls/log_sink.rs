use log::{debug, error, info};
use crate::database::structs::log_sink::LogSink;
use crate::database::traits::event_sink::EventSink;

impl EventSink for LogSink {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn debug(&self, message: &str) {
        debug!("{}", message);
    }
}
