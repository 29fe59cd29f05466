use log::Level;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct MemorySink {
    pub(crate) events: Mutex<Vec<(Level, String)>>,
}
