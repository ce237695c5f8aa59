//! Dotted items: a zipper across one alternative of a rule. The dot sits
//! between `matched` (already consumed) and `remaining` (still to come).
//!
//! Identity is structural. Two items are the same item exactly when head,
//! matched and remaining all agree; the chart's reduction memo and kernel
//! index both rely on that.

use crate::grammar::{NonTerm, Symbol, Term};

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Item {
    head: NonTerm,
    matched: Vec<Symbol>,
    remaining: Vec<Symbol>,
}

/// What an item wants next, i.e. how the driver loop must treat it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Next<'a> {
    /// Dot at the end: `head` is fully matched.
    Reduce,
    /// Dot before a terminal.
    Shift(&'a Term),
    /// Dot before a non-terminal.
    Pending(&'a NonTerm),
}

impl Item {
    pub fn new(head: NonTerm, matched: Vec<Symbol>, remaining: Vec<Symbol>) -> Item {
        Item { head, matched, remaining }
    }

    /// The item with the dot at the start of `rhs`.
    pub fn predicted(head: NonTerm, rhs: Vec<Symbol>) -> Item {
        Item { head, matched: vec![], remaining: rhs }
    }

    pub fn head(&self) -> &NonTerm { &self.head }
    pub fn matched(&self) -> &[Symbol] { &self.matched }
    pub fn remaining(&self) -> &[Symbol] { &self.remaining }

    /// The symbol right of the dot.
    pub fn first(&self) -> Option<&Symbol> { self.remaining.first() }

    pub fn next(&self) -> Next<'_> {
        match self.first() {
            None => Next::Reduce,
            Some(Symbol::Term(t)) => Next::Shift(t),
            Some(Symbol::NonTerm(a)) => Next::Pending(a),
        }
    }

    /// The non-terminal right of the dot, if that is what comes next.
    pub fn pending(&self) -> Option<&NonTerm> {
        self.first().and_then(Symbol::as_nonterm)
    }

    pub fn is_predicted(&self) -> bool { self.matched.is_empty() }

    /// A kernel item is one mid-recognition.
    pub fn is_kernel(&self) -> bool { !self.matched.is_empty() }

    pub fn is_reduce(&self) -> bool { self.remaining.is_empty() }

    pub fn is_shift(&self) -> bool { matches!(self.next(), Next::Shift(_)) }

    pub fn is_pending(&self) -> bool { matches!(self.next(), Next::Pending(_)) }

    /// Moves the dot across `symbol`. `None` when `symbol` is not what comes
    /// next; that is an ordinary outcome, the path is simply dead.
    pub fn accept(&self, symbol: &Symbol) -> Option<Item> {
        let (first, rest) = self.remaining.split_first()?;
        if first != symbol {
            return None;
        }
        let mut matched = Vec::with_capacity(self.matched.len() + 1);
        matched.extend_from_slice(&self.matched);
        matched.push(first.clone());
        Some(Item { head: self.head.clone(), matched, remaining: rest.to_vec() })
    }
}

#[cfg(test)]
#[path = "tests/item.rs"]
mod tests_for_item;
