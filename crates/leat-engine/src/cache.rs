//! The per-recomputation run cache.

use indexmap::IndexMap;
use leat_core::CellPos;

/// Memoized connected-component storage for one recomputation pass.
///
/// Partitioning records each component once, keyed by membership, so a
/// later step that starts from any cell of an already-visited component
/// finds it here instead of repeating the flood fill.
///
/// The cache is owned by a single [`Planner`](crate::Planner) call:
/// constructed fresh at the start of every recomputation, passed by
/// reference to the sub-steps, and discarded at the end. Nothing is
/// shared across calls, so a grid mutation can never observe stale
/// components.
#[derive(Debug, Default)]
pub struct RunCache {
    components: Vec<Vec<CellPos>>,
    membership: IndexMap<CellPos, usize>,
}

impl RunCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a component and index its members; returns the component's
    /// index.
    pub fn record(&mut self, component: Vec<CellPos>) -> usize {
        let index = self.components.len();
        for pos in &component {
            self.membership.insert(*pos, index);
        }
        self.components.push(component);
        index
    }

    /// The index of the component containing `pos`, if recorded.
    pub fn component_of(&self, pos: CellPos) -> Option<usize> {
        self.membership.get(&pos).copied()
    }

    /// The cells of the component at `index`, in canonical order.
    pub fn component(&self, index: usize) -> Option<&[CellPos]> {
        self.components.get(index).map(Vec::as_slice)
    }

    /// Iterate all recorded components in discovery order.
    pub fn components(&self) -> impl Iterator<Item = &[CellPos]> {
        self.components.iter().map(Vec::as_slice)
    }

    /// Number of recorded components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no components have been recorded.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u16, col: u16) -> CellPos {
        CellPos::new(row, col)
    }

    #[test]
    fn record_indexes_members() {
        let mut cache = RunCache::new();
        assert!(cache.is_empty());
        let a = cache.record(vec![p(0, 0), p(0, 1)]);
        let b = cache.record(vec![p(3, 3)]);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.component_of(p(0, 1)), Some(a));
        assert_eq!(cache.component_of(p(3, 3)), Some(b));
        assert_eq!(cache.component_of(p(4, 4)), None);
        assert_eq!(cache.component(a), Some(&[p(0, 0), p(0, 1)][..]));
    }

    #[test]
    fn components_iterate_in_discovery_order() {
        let mut cache = RunCache::new();
        cache.record(vec![p(1, 1)]);
        cache.record(vec![p(0, 0)]);
        let lens: Vec<_> = cache.components().map(<[CellPos]>::len).collect();
        assert_eq!(lens, vec![1, 1]);
        assert_eq!(cache.components().next(), Some(&[p(1, 1)][..]));
    }
}
