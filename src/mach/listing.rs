use crate::lang::{Line, LineNumber, MaxValue};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::ops::RangeInclusive;
use std::sync::Arc;

/// ## Program store
///
/// Lines are kept sorted by line number. Cloning is cheap; the map is
/// copied on the next write only while a clone is still alive.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<u16, Arc<Line>>>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn insert(&mut self, line: Line) -> Option<Arc<Line>> {
        debug_assert!(line.number() >= 1 && line.number() <= LineNumber::max_value());
        Arc::make_mut(&mut self.source).insert(line.number(), Arc::new(line))
    }

    pub fn remove(&mut self, number: u16) -> Option<Arc<Line>> {
        if !self.source.contains_key(&number) {
            return None;
        }
        Arc::make_mut(&mut self.source).remove(&number)
    }

    pub fn contains(&self, number: u16) -> bool {
        self.source.contains_key(&number)
    }

    pub fn get(&self, number: u16) -> Option<Arc<Line>> {
        self.source.get(&number).cloned()
    }

    pub fn first(&self) -> Option<u16> {
        self.source.keys().next().copied()
    }

    /// The next stored line strictly after `number`.
    pub fn next_after(&self, number: u16) -> Option<u16> {
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    pub fn lines(&self) -> Values<'_, u16, Arc<Line>> {
        self.source.values()
    }

    pub fn range(&self, range: RangeInclusive<u16>) -> impl Iterator<Item = &Arc<Line>> + '_ {
        self.source.range(range).map(|(_, line)| line)
    }
}
