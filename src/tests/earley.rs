// This is actually defined at `crate::earley::tests_for_earley`

use crate::earley::*;
use crate::grammar::{Grammar, Symbol};
use crate::tests::{g1, g2, grammar, input, nt};
use crate::words;

#[test]
fn g1_scenarios() {
    let g = g1();
    let earley = Earley::new(&g, "A");
    assert!(earley.recognize(&input("a")));
    assert!(earley.recognize(&input("aa")));
    assert!(earley.recognize(&input("aaa")));
    assert!(!earley.recognize(&input("")));
    assert!(!earley.recognize(&input("b")));
    assert!(!earley.recognize(&input("ab")));
    assert!(!earley.recognize(&input("aab")));
}

#[test]
fn g2_scenarios() {
    let g = g2();
    let earley = Earley::new(&g, "B");
    assert!(earley.recognize(&input("b")));
    assert!(earley.recognize(&input("bbb")));
    assert!(earley.recognize(&input("bbbbb")));
    assert!(!earley.recognize(&input("bb")));
    assert!(!earley.recognize(&input("bbbb")));
    assert!(!earley.recognize(&input("")));
}

#[test]
fn left_recursion_terminates() {
    let g = grammar(r"X ::= X 'a' | 'a'");
    let earley = Earley::new(&g, "X");
    for n in 1..20 {
        assert!(earley.recognize(&input(&"a".repeat(n))), "a^{}", n);
    }
    assert!(!earley.recognize(&input("")));
    assert!(!earley.recognize(&input("aab")));
}

#[test]
fn right_recursion_routes_to_origin() {
    let g = grammar(r"S ::= 'a' S 'b' | 'a' 'b'");
    let earley = Earley::new(&g, "S");
    assert!(earley.recognize(&input("ab")));
    assert!(earley.recognize(&input("aabb")));
    assert!(earley.recognize(&input("aaabbb")));
    assert!(!earley.recognize(&input("aab")));
    assert!(!earley.recognize(&input("abab")));
    assert!(!earley.recognize(&input("abb")));
}

#[test]
fn empty_language_rejection() {
    let g = grammar(r"A ::= 'b'");
    let earley = Earley::new(&g, "A");
    assert!(earley.recognize(&input("b")));
    for s in ["", "a", "bb", "ba", "ab"] {
        assert!(!earley.recognize(&input(s)), "{:?}", s);
    }
}

#[test]
fn unknown_start_is_rejected() {
    let g = g1();
    let earley = Earley::new(&g, "Nope");
    assert!(!earley.recognize(&input("a")));
    assert!(!earley.recognize(&input("")));
    let chart = earley.chart(&input("aa"));
    assert_eq!(chart.len(), 3);
    assert!(chart.kernels(0).unwrap().is_empty());

    assert!(!Earley::new(&Grammar::empty(), "A").recognize(&input("a")));
}

#[test]
fn undefined_nonterm_path_dies() {
    let g = grammar(r"S ::= Missing 'x' | 'y'");
    let earley = Earley::new(&g, "S");
    assert!(earley.recognize(&input("y")));
    assert!(!earley.recognize(&input("x")));
}

#[test]
fn determinism() {
    let g = grammar(r"S ::= S S | 'x' | '(' S ')'");
    let earley = Earley::new(&g, "S");
    let s = input("(xx)x(x)");
    let first = earley.chart(&s);
    for _ in 0..5 {
        assert!(earley.recognize(&s));
        assert_eq!(earley.chart(&s), first);
    }
}

#[test]
fn arithmetic() {
    let g = grammar(r"
        E ::= E '+' T | T;
        T ::= T '*' F | F;
        F ::= '(' E ')' | 'x'
    ");
    let earley = Earley::new(&g, "E");
    for s in ["x", "x+x", "x+x*x", "(x+x)*x", "((x))", "x*(x+x*x)+x"] {
        assert!(earley.recognize(&input(s)), "{}", s);
    }
    for s in ["", "x+", "()", "+x", "x(x)", "(x+x", "xx"] {
        assert!(!earley.recognize(&input(s)), "{}", s);
    }
    // a sub-expression is recognized from its own non-terminal
    assert!(Earley::new(&g, "F").recognize(&input("(x+x)")));
    assert!(!Earley::new(&g, "F").recognize(&input("x+x")));
}

#[test]
fn word_terminals() {
    let g = grammar(r"
        Stmt ::= 'if' Cond 'then' Stmt | 'skip';
        Cond ::= 'true' | 'false' | 'not' Cond
    ");
    let earley = Earley::new(&g, "Stmt");
    assert!(earley.recognize(&words("skip")));
    assert!(earley.recognize(&words("if true then skip")));
    assert!(earley.recognize(&words("if not not false then if true then skip")));
    assert!(!earley.recognize(&words("if skip")));
    assert!(!earley.recognize(&words("if true then")));
    // characters are not words
    assert!(!earley.recognize(&input("skip")));
}

#[test]
fn stepping() {
    let g = g2();
    let start = nt("B");
    let mut state = EarleyState::new(&g, &start, ());
    assert_eq!(state.position(), 0);
    assert!(!state.is_exhausted());

    state.step(&'b'.into());
    assert_eq!(state.position(), 1);
    assert!(state.accepts(&start));
    state.step(&'b'.into());
    assert!(!state.accepts(&start));
    state.step(&'b'.into());
    assert!(state.accepts(&start));

    state.step(&'x'.into());
    assert!(state.is_exhausted());
    assert!(!state.accepts(&start));
    state.step(&'b'.into());
    assert_eq!(state.position(), 5);
    assert_eq!(state.finish().len(), 6);
}

#[test]
fn hand_built_grammar() {
    let g = Grammar::builder()
        .production("Pair", [Symbol::term('('), Symbol::nonterm("Atom"), Symbol::term(','), Symbol::nonterm("Atom"), Symbol::term(')')])
        .production("Atom", [Symbol::term('0')])
        .production("Atom", [Symbol::term('1')])
        .production("Atom", [Symbol::nonterm("Pair")])
        .build();
    let earley = Earley::new(&g, "Pair");
    assert!(earley.recognize(&input("(0,1)")));
    assert!(earley.recognize(&input("((0,0),1)")));
    assert!(!earley.recognize(&input("(0,)")));
    assert_eq!(earley.start(), &nt("Pair"));
    assert!(std::ptr::eq(earley.grammar(), &g));
}

#[test]
fn shared_grammar_across_threads() {
    let g = grammar(r"S ::= 'a' S 'b' | 'a' 'b'");
    let g = &g;
    let inputs = ["ab", "aabb", "aab", "aaabbb", "ba"];
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs.iter()
            .map(|s| scope.spawn(move || Earley::new(g, "S").recognize(&input(s))))
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, true, false, true, false]);
    });
}
