use serde::{Deserialize, Serialize};

/// One write: the cycle index and the wall-clock time it was issued.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InjectionRow {
    #[serde(rename = "loop")]
    pub cycle: i64,
    pub timestamp: String,
}
