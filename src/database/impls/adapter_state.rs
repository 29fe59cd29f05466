use std::fmt;
use crate::database::enums::adapter_state::AdapterState;

impl fmt::Display for AdapterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterState::Uninitialized => write!(f, "uninitialized"),
            AdapterState::Initialized => write!(f, "initialized"),
            AdapterState::Connected => write!(f, "connected"),
            AdapterState::Injecting => write!(f, "injecting"),
            AdapterState::Done => write!(f, "done"),
            AdapterState::Failed => write!(f, "failed"),
        }
    }
}
