//! Curve storage with stable iteration order.

use std::collections::{BTreeSet, HashMap};

use melt_core::{Curve, CurveId};
use tracing::debug;

/// Mapping from curve identity to curve, capped at an optional limit.
///
/// Iteration follows insertion order so redraws replay identical geometry per
/// id. First write wins: a second insert under the same id is a no-op.
#[derive(Debug, Default)]
pub struct CurveStore {
    curves: HashMap<CurveId, Curve>,
    order: Vec<CurveId>,
    count: usize,
    limit: Option<usize>,
}

impl CurveStore {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            curves: HashMap::new(),
            order: Vec::new(),
            count: 0,
            limit,
        }
    }

    /// Insert a curve, returning whether it was stored.
    ///
    /// Returns `false` without touching the store when the id is already
    /// present or the limit is reached. Neither case is an error.
    pub fn insert(&mut self, curve: Curve) -> bool {
        let id = curve.id();
        if self.curves.contains_key(&id) {
            debug!(%id, "duplicate curve id, keeping first write");
            return false;
        }
        if let Some(limit) = self.limit
            && self.count + 1 > limit
        {
            debug!(%id, limit, "curve limit reached, insert skipped");
            return false;
        }
        self.order.push(id.clone());
        self.curves.insert(id, curve);
        self.count += 1;
        true
    }

    /// Keep only the curves whose id is in `keep`; returns the removed ids.
    ///
    /// Full O(n) rebuild rather than incremental deletion. Fine at chart
    /// scale; revisit if stores ever hold thousands of curves.
    pub fn retain_ids(&mut self, keep: &BTreeSet<CurveId>) -> Vec<CurveId> {
        let mut removed = Vec::new();
        let mut kept_order = Vec::with_capacity(self.order.len());
        let mut kept_curves = HashMap::new();
        for id in self.order.drain(..) {
            if keep.contains(&id) {
                if let Some(curve) = self.curves.remove(&id) {
                    kept_curves.insert(id.clone(), curve);
                    kept_order.push(id);
                }
            } else {
                self.curves.remove(&id);
                removed.push(id);
            }
        }
        self.order = kept_order;
        self.curves = kept_curves;
        self.count = self.order.len();
        removed
    }

    /// Stable-order snapshot of all curves.
    pub fn all(&self) -> impl Iterator<Item = &Curve> {
        self.order.iter().filter_map(|id| self.curves.get(id))
    }

    pub fn get(&self, id: &CurveId) -> Option<&Curve> {
        self.curves.get(id)
    }

    pub fn contains(&self, id: &CurveId) -> bool {
        self.curves.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
