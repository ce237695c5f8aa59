use crate::grammar::NonTerm;
use crate::item::Item;

use std::collections::HashSet;
use linear_map::LinearMap;

/// A dotted item together with the input position where its production began.
///
/// The same dotted item can be in progress from several origins at once (right
/// recursion, ambiguity), so the origin is part of the identity.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct KernelItem {
    pub(crate) item: Item,
    pub(crate) origin: usize,
}

impl KernelItem {
    pub fn new(item: Item, origin: usize) -> Self { KernelItem { item, origin } }
    pub fn item(&self) -> &Item { &self.item }
    pub fn origin(&self) -> usize { self.origin }
}

/// The kernel items of one position, indexed by the non-terminal right of
/// their dot. Completing `A` from origin `i` only has to look at
/// `kernels[i].pending_on(A)`.
///
/// These maps hold a handful of keys each; a linear map keeps insertion order,
/// which keeps traces and renderings stable.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Kernels(LinearMap<NonTerm, Vec<KernelItem>>);

impl Kernels {
    pub(crate) fn insert(&mut self, nonterm: NonTerm, entry: KernelItem) {
        self.0.entry(nonterm).or_insert_with(Vec::new).push(entry);
    }

    pub fn pending_on(&self, nonterm: &NonTerm) -> &[KernelItem] {
        self.0.get(nonterm).map(|v| &v[..]).unwrap_or(&[])
    }

    pub fn nonterms(&self) -> impl Iterator<Item=&NonTerm> { self.0.keys() }

    pub fn iter(&self) -> impl Iterator<Item=(&NonTerm, &[KernelItem])> {
        self.0.iter().map(|(nt, v)| (nt, &v[..]))
    }

    /// Total number of kernel items, across all non-terminals.
    pub fn len(&self) -> usize { self.0.values().map(Vec::len).sum() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// The (non-terminal, origin) pairs fully matched ending at one position.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Reductions {
    order: Vec<(NonTerm, usize)>,
    seen: HashSet<(NonTerm, usize)>,
}

impl Reductions {
    /// Returns false if the pair was already recorded; the caller must then
    /// not complete it again.
    pub(crate) fn insert(&mut self, nonterm: NonTerm, origin: usize) -> bool {
        let key = (nonterm, origin);
        if self.seen.contains(&key) {
            return false;
        }
        self.order.push(key.clone());
        self.seen.insert(key);
        true
    }

    pub fn contains(&self, nonterm: &NonTerm, origin: usize) -> bool {
        self.seen.contains(&(nonterm.clone(), origin))
    }

    /// In the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item=(&NonTerm, usize)> {
        self.order.iter().map(|(nt, origin)| (nt, *origin))
    }

    pub fn len(&self) -> usize { self.order.len() }
    pub fn is_empty(&self) -> bool { self.order.is_empty() }
}

/// One kernel set and one reduction record per input position, `0..=n`.
///
/// Grows by one position per terminal consumed; earlier positions are never
/// touched again.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Chart {
    kernels: Vec<Kernels>,
    reductions: Vec<Reductions>,
}

impl Chart {
    pub(crate) fn new() -> Self { Chart::default() }

    pub(crate) fn push(&mut self, kernels: Kernels, reductions: Reductions) {
        self.kernels.push(kernels);
        self.reductions.push(reductions);
    }

    /// Number of positions, i.e. terminals consumed plus one.
    pub fn len(&self) -> usize { self.kernels.len() }

    pub fn is_empty(&self) -> bool { self.kernels.is_empty() }

    pub fn kernels(&self, position: usize) -> Option<&Kernels> { self.kernels.get(position) }

    pub fn reductions(&self, position: usize) -> Option<&Reductions> { self.reductions.get(position) }

    /// True when `start` was reduced from origin 0 at the last position.
    pub fn accepts(&self, start: &NonTerm) -> bool {
        self.reductions.last().map_or(false, |r| r.contains(start, 0))
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item=(usize, &Kernels, &Reductions)> {
        self.kernels.iter().zip(self.reductions.iter()).enumerate().map(|(i, (k, r))| (i, k, r))
    }
}

#[cfg(test)]
#[path = "tests/chart.rs"]
mod tests_for_chart;
