use serde::{
    Deserialize,
    Serialize
};

/// SQL flavour of the relational engines. MongoDB goes through its driver API
/// and has no statements.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqlDialect {
    mysql,
    postgres,
}
