use crate::grammar::Term;

pub trait Rendered {
    fn rendered(&self) -> String;
}

// Single characters run together; as soon as one token is longer, tokens are
// space separated so word boundaries survive.
impl Rendered for [Term] {
    fn rendered(&self) -> String {
        let sep = if self.iter().all(|t| matches!(t, Term::C(_))) { "" } else { " " };
        self.iter()
            .map(|t| t.string())
            .collect::<Vec<_>>()
            .join(sep)
    }
}
