use chrono::Local;
use crate::database::helpers::format_timestamp;
use crate::database::structs::injection_row::InjectionRow;

impl InjectionRow {
    pub fn new(cycle: i64, timestamp: String) -> InjectionRow {
        InjectionRow { cycle, timestamp }
    }

    pub fn now(cycle: i64) -> InjectionRow {
        InjectionRow::new(cycle, format_timestamp(Local::now()))
    }
}
