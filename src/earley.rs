//! Earley recognition, loosely based on the Aretz model, with the driver loop
//! of the Aycock/Horspool parser.
//!
//! Rather than one heterogeneous item list per position, items are filed by
//! what they wait for:
//!
//! * shift items (dot before a terminal) are carried only until the next
//!   terminal is scanned;
//! * kernel items (dot before a non-terminal) are kept per position, indexed
//!   by that non-terminal, for completion to find later;
//! * reductions (dot at the end) are kept per position as (non-terminal,
//!   origin) pairs.
//!
//! Each position is built by one fixpoint over a worklist: scan seeds it,
//! predict and complete feed it, and it runs until empty.
//!
//! Empty productions are not supported: an item reduced at its own origin
//! only sees kernel items already filed at that position.

use crate::chart::{Chart, KernelItem, Kernels, Reductions};
use crate::grammar::{Grammar, NonTerm, Symbol, Term};
use crate::item::Next;
use crate::observer::{Event, Observer};

use std::collections::HashSet;

/// A grammar and the non-terminal its inputs are recognized against.
pub struct Earley<'g> {
    grammar: &'g Grammar,
    start: NonTerm,
}

impl<'g> Earley<'g> {
    pub fn new(grammar: &'g Grammar, start: impl Into<NonTerm>) -> Self {
        Earley { grammar, start: start.into() }
    }

    pub fn grammar(&self) -> &'g Grammar { self.grammar }
    pub fn start(&self) -> &NonTerm { &self.start }

    /// True iff the start symbol derives exactly `input`.
    pub fn recognize(&self, input: &[Term]) -> bool {
        self.recognize_with(input, ())
    }

    pub fn recognize_with<O: Observer>(&self, input: &[Term], observer: O) -> bool {
        let mut state = EarleyState::new(self.grammar, &self.start, observer);
        for t in input {
            // nothing left to scan: every later position would be empty
            if state.is_exhausted() {
                return false;
            }
            state.step(t);
        }
        state.accepts(&self.start)
    }

    /// The full chart for `input`, one position per terminal plus one.
    pub fn chart(&self, input: &[Term]) -> Chart {
        self.chart_with(input, ())
    }

    pub fn chart_with<O: Observer>(&self, input: &[Term], observer: O) -> Chart {
        let mut state = EarleyState::new(self.grammar, &self.start, observer);
        for t in input {
            state.step(t);
        }
        state.finish()
    }
}

/// A chart under construction: every position up to the terminals stepped so
/// far is closed, and the shift items of the last one are held for the next
/// scan.
pub struct EarleyState<'g, O: Observer = ()> {
    grammar: &'g Grammar,
    chart: Chart,
    shifts: Vec<KernelItem>,
    observer: O,
}

impl<'g, O: Observer> EarleyState<'g, O> {
    /// Seeds and closes position 0 from the predictions for `start`.
    pub fn new(grammar: &'g Grammar, start: &NonTerm, mut observer: O) -> Self {
        observer.observe(&Event::Seed { start });
        observer.observe(&Event::Predict { position: 0, nonterm: start });
        let worklist = grammar.predict([start])
            .into_iter()
            .map(|item| KernelItem::new(item, 0))
            .collect();
        let mut state = EarleyState { grammar, chart: Chart::new(), shifts: vec![], observer };
        state.close(worklist, HashSet::from([start.clone()]));
        state
    }

    /// Number of terminals consumed so far.
    pub fn position(&self) -> usize { self.chart.len().saturating_sub(1) }

    pub fn chart(&self) -> &Chart { &self.chart }

    pub fn finish(self) -> Chart { self.chart }

    pub fn accepts(&self, start: &NonTerm) -> bool { self.chart.accepts(start) }

    /// No item is waiting for a terminal, so no further input can be accepted.
    pub fn is_exhausted(&self) -> bool { self.shifts.is_empty() }

    /// Scans `term` with the carried shift items and closes the next position.
    pub fn step(&mut self, term: &Term) {
        let position = self.chart.len();
        let symbol = Symbol::Term(term.clone());
        let mut worklist = Vec::new();
        for entry in std::mem::take(&mut self.shifts) {
            if let Some(item) = entry.item.accept(&symbol) {
                let scanned = KernelItem::new(item, entry.origin);
                self.observer.observe(&Event::Scan { position, term, item: &scanned });
                worklist.push(scanned);
            }
        }
        self.close(worklist, HashSet::new());
    }

    // Runs the predict/complete fixpoint for the next position and appends it
    // to the chart. `predicted` holds the non-terminals whose alternatives are
    // already on the worklist.
    fn close(&mut self, mut worklist: Vec<KernelItem>, mut predicted: HashSet<NonTerm>) {
        let position = self.chart.len();
        let mut kernels = Kernels::default();
        let mut reductions = Reductions::default();
        let mut seen: HashSet<KernelItem> = HashSet::new();

        while let Some(entry) = worklist.pop() {
            if !seen.insert(entry.clone()) {
                continue;
            }
            match entry.item.next() {
                Next::Reduce => {
                    let nt = entry.item.head();
                    if !reductions.insert(nt.clone(), entry.origin) {
                        continue;
                    }
                    self.observer.observe(&Event::Complete { position, nonterm: nt, origin: entry.origin });
                    let waiting = match self.chart.kernels(entry.origin) {
                        Some(earlier) => earlier.pending_on(nt),
                        None => kernels.pending_on(nt),
                    };
                    let symbol = Symbol::NonTerm(nt.clone());
                    for w in waiting {
                        if let Some(item) = w.item.accept(&symbol) {
                            worklist.push(KernelItem::new(item, w.origin));
                        }
                    }
                }
                Next::Pending(nt) => {
                    let nt = nt.clone();
                    self.observer.observe(&Event::Kernel { position, item: &entry });
                    if predicted.insert(nt.clone()) {
                        self.observer.observe(&Event::Predict { position, nonterm: &nt });
                        worklist.extend(self.grammar.predict([&nt])
                                        .into_iter()
                                        .map(|item| KernelItem::new(item, position)));
                    }
                    kernels.insert(nt, entry);
                }
                Next::Shift(_) => {
                    self.observer.observe(&Event::Shift { position, item: &entry });
                    self.shifts.push(entry);
                }
            }
        }

        self.observer.observe(&Event::Close { position, kernels: &kernels, reductions: &reductions });
        self.chart.push(kernels, reductions);
    }
}

#[cfg(test)]
#[path = "tests/earley.rs"]
mod tests_for_earley;
