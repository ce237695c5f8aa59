//! Hooks into chart construction, for debugging.
//!
//! An observer only ever sees borrowed, read-only views; the recognizer's
//! result and chart are the same whether or not one is attached.

use crate::chart::{KernelItem, Kernels, Reductions};
use crate::grammar::{NonTerm, Term};

#[derive(Debug)]
pub enum Event<'a> {
    /// Recognition begins with `start` predicted at position 0.
    Seed { start: &'a NonTerm },
    /// `item` resulted from moving a carried item across `term`.
    Scan { position: usize, term: &'a Term, item: &'a KernelItem },
    /// First item pending on `nonterm` at `position`; its alternatives are
    /// predicted here.
    Predict { position: usize, nonterm: &'a NonTerm },
    /// `item` was recorded in the kernel set of `position`.
    Kernel { position: usize, item: &'a KernelItem },
    /// `item` is held for the scan of the next terminal.
    Shift { position: usize, item: &'a KernelItem },
    /// `nonterm` was fully matched from `origin` to `position`, for the first
    /// time.
    Complete { position: usize, nonterm: &'a NonTerm, origin: usize },
    /// The fixpoint for `position` ran to completion.
    Close { position: usize, kernels: &'a Kernels, reductions: &'a Reductions },
}

pub trait Observer {
    fn observe(&mut self, event: &Event<'_>);
}

/// Observes nothing.
impl Observer for () {
    fn observe(&mut self, _event: &Event<'_>) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn observe(&mut self, event: &Event<'_>) {
        (**self).observe(event)
    }
}

/// Forwards events to the `log` facade: individual actions at trace level,
/// per-position summaries at debug level.
#[derive(Copy, Clone, Default, Debug)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&mut self, event: &Event<'_>) {
        match event {
            Event::Close { position, kernels, reductions } => {
                log::debug!("closed {}: {} kernel items, {} reductions",
                            position, kernels.len(), reductions.len());
            }
            event => log::trace!("{}", event),
        }
    }
}

/// Keeps a rendered line per event.
#[derive(Clone, Default, Debug)]
pub struct Recorder(Vec<String>);

impl Recorder {
    pub fn new() -> Self { Recorder(vec![]) }

    pub fn lines(&self) -> &[String] { &self.0 }

    pub fn rendered(&self) -> String {
        let mut s = String::new();
        for line in &self.0 {
            s.push_str(line);
            s.push('\n');
        }
        s
    }
}

impl Observer for Recorder {
    fn observe(&mut self, event: &Event<'_>) {
        self.0.push(event.to_string());
    }
}

#[cfg(test)]
#[path = "tests/observer.rs"]
mod tests_for_observer;
