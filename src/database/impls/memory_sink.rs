use log::Level;
use crate::database::structs::memory_sink::MemorySink;
use crate::database::traits::event_sink::EventSink;

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|(event_level, _)| *event_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(Level::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(Level::Error)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.events.lock().iter().any(|(_, message)| message.contains(needle))
    }

    fn push(&self, level: Level, message: &str) {
        self.events.lock().push((level, message.to_string()));
    }
}

impl EventSink for MemorySink {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }
}
