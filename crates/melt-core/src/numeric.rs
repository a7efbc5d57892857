use core::cmp::Ordering;

use crate::MeltError;

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, MeltError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MeltError::NonFinite { what, value: v })
    }
}

/// Total-order wrapper over a temperature value.
///
/// Aggregation groups readings by *exact* temperature; this key makes `f64`
/// usable in a `BTreeMap` via `total_cmp`. Two temperatures group together
/// only when their bit representations compare equal, so 39.9999 and 40.0
/// stay separate groups.
#[derive(Debug, Clone, Copy)]
pub struct TempKey(pub f64);

impl PartialEq for TempKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for TempKey {}

impl PartialOrd for TempKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TempKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
