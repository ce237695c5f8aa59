use anyhow::{anyhow, Result};
use aretz::rendering::Rendered;
use aretz::{Earley, LogObserver, NonTerm, Term};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Decide whether inputs belong to the language of a context-free grammar.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grammar file, e.g. `A ::= 'a' | A 'a'; B ::= 'b'`
    #[arg(short, long)]
    grammar: PathBuf,
    /// Start non-terminal; defaults to the first one declared
    #[arg(short, long)]
    start: Option<String>,
    /// Split inputs on whitespace instead of into characters
    #[arg(short, long)]
    words: bool,
    /// Print the chart built for each input
    #[arg(short, long)]
    chart: bool,
    /// Inputs to recognize
    inputs: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    run(Args::parse(), &mut std::io::stdout().lock())
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let grammar = aretz::load_grammar(&args.grammar)?;
    for nt in grammar.undefined_nonterms() {
        log::warn!("non-terminal {} is used but never defined", nt);
    }
    for nt in grammar.empty_productions() {
        log::warn!("non-terminal {} has an empty alternative; those are not supported", nt);
    }

    let start: NonTerm = match (args.start, grammar.start()) {
        (Some(s), _) => s.into(),
        (None, Some(nt)) => nt.clone(),
        (None, None) => return Err(anyhow!("{} declares no rules", args.grammar.display())),
    };
    let earley = Earley::new(&grammar, start);

    for text in &args.inputs {
        let input: Vec<Term> = if args.words { aretz::words(text) } else { aretz::chars(text) };
        let accepted = if log::log_enabled!(log::Level::Trace) {
            earley.recognize_with(&input, LogObserver)
        } else {
            earley.recognize(&input)
        };
        writeln!(out, "{} {}", if accepted { "accept" } else { "reject" }, input.rendered())?;
        if args.chart {
            write!(out, "{}", earley.chart(&input))?;
        }
        log::info!("{} terminals, start {}: {}", input.len(), earley.start(), accepted);
    }
    Ok(())
}
