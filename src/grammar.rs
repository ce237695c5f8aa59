use crate::item::Item;

use std::collections::{HashMap, HashSet};

use derive_more::{Display, From};

// A grammar G is a tuple (Sigma, Delta, R), where
//   Sigma is a finite set of terminals
//   Delta is a finite set of non-terminals
//   R maps non-terminals to a set of alternative right-hand sides, each a
//     sequence drawn from Sigma and Delta
//
// The two alphabets are kept apart by an explicit tag on `Symbol`, never by
// spelling.

#[derive(PartialEq, Eq, Debug)]
pub struct Grammar {
    // declaration order of the left-hand sides
    order: Vec<NonTerm>,
    rules: HashMap<NonTerm, Vec<Vec<Symbol>>>,
}

impl Grammar {
    pub fn empty() -> Self { Grammar { order: vec![], rules: HashMap::new() } }

    pub fn builder() -> GrammarBuilder { GrammarBuilder(vec![]) }

    /// Rules sharing a left-hand side accumulate their alternatives, in order;
    /// an alternative already present for that non-terminal is dropped.
    pub fn from_rules(rules: impl IntoIterator<Item=Rule>) -> Self {
        let mut g = Grammar::empty();
        for Rule { lhs, alternatives } in rules {
            if !g.rules.contains_key(&lhs) {
                g.order.push(lhs.clone());
            }
            let alts = g.rules.entry(lhs).or_insert_with(Vec::new);
            for rhs in alternatives {
                if !alts.contains(&rhs) {
                    alts.push(rhs);
                }
            }
        }
        g
    }

    pub fn nonterms(&self) -> impl Iterator<Item=&NonTerm> {
        self.order.iter()
    }

    pub fn terms(&self) -> HashSet<Term> {
        self.rules.values()
            .flatten()
            .flatten()
            .filter_map(|s| s.as_term().cloned())
            .collect()
    }

    /// The first declared non-terminal, if any.
    pub fn start(&self) -> Option<&NonTerm> { self.order.first() }

    pub fn contains(&self, nonterm: &NonTerm) -> bool { self.rules.contains_key(nonterm) }

    /// The alternatives for `nonterm`; unknown non-terminals have none.
    pub fn productions_of(&self, nonterm: &NonTerm) -> &[Vec<Symbol>] {
        self.rules.get(nonterm).map(|alts| &alts[..]).unwrap_or(&[])
    }

    /// One predicted item (dot at the start) per alternative of each given
    /// non-terminal. Unknown non-terminals contribute nothing.
    ///
    /// The result is ordered by the input, then by declaration order of the
    /// alternatives, so a given grammar always predicts the same sequence.
    pub fn predict<'n>(&self, nonterms: impl IntoIterator<Item=&'n NonTerm>) -> Vec<Item> {
        let mut items = Vec::new();
        for nt in nonterms {
            for rhs in self.productions_of(nt) {
                items.push(Item::predicted(nt.clone(), rhs.clone()));
            }
        }
        items
    }

    /// Non-terminals that appear on some right-hand side but have no rule.
    pub fn undefined_nonterms(&self) -> Vec<&NonTerm> {
        // one might argue that these make the grammar ill-formed. The
        // recognizer does not care: a path through one simply never completes.
        let mut seen = HashSet::new();
        let mut accum = Vec::new();
        for nt in &self.order {
            for rhs in &self.rules[nt] {
                for a in rhs.iter().filter_map(Symbol::as_nonterm) {
                    if !self.contains(a) && seen.insert(a) {
                        accum.push(a);
                    }
                }
            }
        }
        accum
    }

    /// Non-terminals with an empty alternative. Recognition does not support
    /// these; they are reported so a caller can reject such grammars up front.
    pub fn empty_productions(&self) -> Vec<&NonTerm> {
        self.order.iter()
            .filter(|nt| self.rules[*nt].iter().any(|rhs| rhs.is_empty()))
            .collect()
    }
}

/// One left-hand side with the alternatives written for it.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Rule {
    pub(crate) lhs: NonTerm,
    pub(crate) alternatives: Vec<Vec<Symbol>>,
}

impl Rule {
    pub fn new(lhs: impl Into<NonTerm>, alternatives: Vec<Vec<Symbol>>) -> Rule {
        Rule { lhs: lhs.into(), alternatives }
    }

    pub fn lhs(&self) -> &NonTerm { &self.lhs }
    pub fn alternatives(&self) -> &[Vec<Symbol>] { &self.alternatives }
}

pub struct GrammarBuilder(Vec<Rule>);

impl GrammarBuilder {
    pub fn production(mut self, lhs: impl Into<NonTerm>, rhs: impl IntoIterator<Item=Symbol>) -> Self {
        self.0.push(Rule::new(lhs, vec![rhs.into_iter().collect()]));
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.0.push(rule);
        self
    }

    pub fn build(self) -> Grammar {
        Grammar::from_rules(self.0)
    }
}

#[derive(PartialEq, Eq, Clone, Hash, Debug)]
pub enum Term { C(char), S(String) }

impl Term {
    /// A one-character token becomes `Term::C`, anything longer `Term::S`,
    /// so that `'a'` in a grammar and `a` in an input always agree.
    pub fn token(s: &str) -> Term {
        let mut cs = s.chars();
        match (cs.next(), cs.next()) {
            (Some(c), None) => Term::C(c),
            _ => Term::S(s.to_string()),
        }
    }

    pub(crate) fn string(&self) -> String {
        match self {
            Term::C(c) => c.to_string(),
            Term::S(s) => s.clone(),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Hash, Debug, Display)]
pub struct NonTerm(pub(crate) String);

impl NonTerm {
    pub fn name(&self) -> &str { &self.0 }
}

#[derive(PartialEq, Eq, Clone, Hash, Debug, From)]
pub enum Symbol {
    Term(Term),
    NonTerm(NonTerm),
}

impl Symbol {
    pub fn term(t: impl Into<Term>) -> Self { Symbol::Term(t.into()) }
    pub fn nonterm(a: impl Into<NonTerm>) -> Self { Symbol::NonTerm(a.into()) }

    pub fn is_term(&self) -> bool { matches!(self, Symbol::Term(_)) }
    pub fn is_nonterm(&self) -> bool { matches!(self, Symbol::NonTerm(_)) }

    pub fn as_term(&self) -> Option<&Term> {
        if let Symbol::Term(t) = self { Some(t) } else { None }
    }

    pub fn as_nonterm(&self) -> Option<&NonTerm> {
        if let Symbol::NonTerm(a) = self { Some(a) } else { None }
    }
}

impl From<char> for Term { fn from(a: char) -> Self { Self::C(a) } }
impl From<&str> for Term { fn from(a: &str) -> Self { Self::token(a) } }
impl From<String> for Term { fn from(a: String) -> Self { Self::token(&a) } }
impl From<&str> for NonTerm { fn from(a: &str) -> Self { Self(a.into()) } }
impl From<String> for NonTerm { fn from(a: String) -> Self { Self(a) } }

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
