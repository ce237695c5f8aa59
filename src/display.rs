use crate::chart::{Chart, KernelItem};
use crate::grammar::{Grammar, NonTerm, Rule, Symbol, Term};
use crate::item::Item;
use crate::observer::Event;

impl std::fmt::Display for Term {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Term::C(c) => write!(w, "'{}'", c),
            Term::S(s) => write!(w, "'{}'", s),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Symbol::Term(t) => write!(w, "{}", t),
            Symbol::NonTerm(NonTerm(name)) => write!(w, "{}", name),
        }
    }
}

fn fmt_alternative(rhs: &[Symbol], w: &mut std::fmt::Formatter) -> std::fmt::Result {
    if rhs.is_empty() {
        return write!(w, "''");
    }
    let mut sep = "";
    for s in rhs {
        write!(w, "{}{}", sep, s)?;
        sep = " ";
    }
    Ok(())
}

fn fmt_alternatives(lhs: &NonTerm, alts: &[Vec<Symbol>], w: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(w, "{} ::= ", lhs)?;
    let mut sep = "";
    for rhs in alts {
        write!(w, "{}", sep)?;
        fmt_alternative(rhs, w)?;
        sep = " | ";
    }
    Ok(())
}

// `A ::= 'a' * A`: the star is the dot.
impl std::fmt::Display for Item {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{} ::=", self.head())?;
        for s in self.matched() {
            write!(w, " {}", s)?;
        }
        write!(w, " *")?;
        for s in self.remaining() {
            write!(w, " {}", s)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for KernelItem {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{} @{}", self.item, self.origin)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt_alternatives(self.lhs(), self.alternatives(), w)
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        for nt in self.nonterms() {
            fmt_alternatives(nt, self.productions_of(nt), w)?;
            writeln!(w, ";")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, kernels, reductions) in self.positions() {
            writeln!(w, "{}:", i)?;
            for (_, entries) in kernels.iter() {
                for entry in entries {
                    writeln!(w, "  {}", entry)?;
                }
            }
            for (nt, origin) in reductions.iter() {
                writeln!(w, "  reduce {} @{}", nt, origin)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Event<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Seed { start } => write!(w, "seed {}", start),
            Event::Scan { position, term, item } => write!(w, "scan {} {}: {}", position, term, item),
            Event::Predict { position, nonterm } => write!(w, "predict {} {}", position, nonterm),
            Event::Kernel { position, item } => write!(w, "kernel {} {}", position, item),
            Event::Shift { position, item } => write!(w, "shift {} {}", position, item),
            Event::Complete { position, nonterm, origin } => {
                write!(w, "complete {} {} @{}", position, nonterm, origin)
            }
            Event::Close { position, kernels, reductions } => {
                write!(w, "close {}: {} kernel, {} reduced", position, kernels.len(), reductions.len())
            }
        }
    }
}
