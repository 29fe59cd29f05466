use std::fmt;
use crate::database::enums::cycle_bound::CycleBound;

impl CycleBound {
    pub fn from_num_loops(num_loops: u64) -> CycleBound {
        match num_loops {
            0 => CycleBound::Unbounded,
            n => CycleBound::Finite(i64::try_from(n).unwrap_or(i64::MAX)),
        }
    }

    /// Exclusive upper bound of the cycle index.
    pub fn limit(&self) -> i64 {
        match self {
            CycleBound::Finite(n) => *n,
            CycleBound::Unbounded => i64::MAX,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, CycleBound::Unbounded)
    }
}

impl fmt::Display for CycleBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleBound::Finite(n) => write!(f, "{}", n),
            CycleBound::Unbounded => write!(f, "{} (unbounded)", i64::MAX),
        }
    }
}
