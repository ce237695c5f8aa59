//! Recognition of context-free languages with an Earley chart.
//!
//! A `Grammar` maps each non-terminal to its alternative right-hand sides.
//! `recognize` decides whether a start non-terminal derives an input exactly;
//! `Earley::chart` keeps the chart it built, one kernel set and one reduction
//! record per input position, for whatever wants to build trees from it.
//!
//! Grammars without empty productions only.

#[macro_use] extern crate lalrpop_util;

pub mod grammar;
pub mod item;
pub mod chart;
pub mod earley;
pub mod observer;
pub mod rendering;

mod display;

lalrpop_mod!(notation); // synthesized by LALRPOP

pub use chart::{Chart, KernelItem, Kernels, Reductions};
pub use earley::{Earley, EarleyState};
pub use grammar::{Grammar, GrammarBuilder, NonTerm, Rule, Symbol, Term};
pub use item::{Item, Next};
pub use observer::{Event, LogObserver, Observer, Recorder};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grammar notation: {0}")]
    Notation(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// True iff `start` derives exactly `input` under `grammar`.
///
/// An unknown `start` is not an error; nothing derives from it, so the answer
/// is false.
pub fn recognize(grammar: &Grammar, input: &[Term], start: &NonTerm) -> bool {
    Earley::new(grammar, start.clone()).recognize(input)
}

/// Same as `recognize`, reporting every step of chart construction to
/// `observer`.
pub fn recognize_with(grammar: &Grammar, input: &[Term], start: &NonTerm, observer: impl Observer) -> bool {
    Earley::new(grammar, start.clone()).recognize_with(input, observer)
}

/// Reads a grammar written as `A ::= 'a' | A 'a'; B ::= 'b'`.
pub fn parse_grammar(text: &str) -> Result<Grammar, Error> {
    let rules = notation::RulesParser::new()
        .parse(text)
        .map_err(|e| Error::Notation(e.to_string()))?;
    Ok(Grammar::from_rules(rules))
}

pub fn load_grammar(path: impl AsRef<std::path::Path>) -> Result<Grammar, Error> {
    let text = fs_err::read_to_string(path.as_ref())?;
    parse_grammar(&text)
}

/// One terminal per character.
pub fn chars(s: &str) -> Vec<Term> {
    s.chars().map(Term::C).collect()
}

/// One terminal per whitespace-separated word.
pub fn words(s: &str) -> Vec<Term> {
    s.split_whitespace().map(Term::token).collect()
}
