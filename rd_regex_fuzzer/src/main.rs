
extern crate rd_regex_parse;
extern crate rand;

mod rnd;
mod str_gen;
mod fuzz_gen;
mod check;

use std::ops::Range;
use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, error, info};
use check::Checker;
use fuzz_gen::*;
use rnd::*;
use str_gen::*;

const DEFAULT_CHARSET: &str = "ab_09()[]^-*|ε∅$ ";
const LITERAL_ALPHABET: &str = "abcxyz019_";

#[derive(Debug, Parser)]
#[command(name = "rd_regex_fuzzer")]
#[command(about = "Throws random patterns at the regex parser and checks its invariants")]
struct CliArgs {
    /// Seed of the random generator, defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 10_000)]
    iterations: usize,

    /// Shortest random pattern, in characters.
    #[arg(long, default_value_t = 0)]
    min_len: usize,

    /// Longest random pattern, in characters.
    #[arg(long, default_value_t = 24)]
    max_len: usize,

    /// Characters random patterns are drawn from.
    #[arg(long, default_value = DEFAULT_CHARSET)]
    charset: String,

    /// Maximum group nesting of well-formed patterns.
    #[arg(long, default_value_t = 4)]
    max_depth: usize,

    /// Require well-formed patterns to be consumed entirely.
    #[arg(long)]
    strict: bool,

    /// Stop at the first violation.
    #[arg(long)]
    fail_fast: bool,
}

/// The half-open range of random pattern lengths for `--min-len` and
/// `--max-len`, both inclusive.
fn pattern_lengths(min_len: usize, max_len: usize) -> Result<Range<usize>> {
    if min_len > max_len {
        bail!("--min-len ({}) is larger than --max-len ({})", min_len, max_len);
    }
    match max_len.checked_add(1) {
        Some(end) => Ok(min_len..end),
        None => bail!("--max-len ({}) is too large", max_len),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let lengths = pattern_lengths(args.min_len, args.max_len)?;
    if args.charset.is_empty() {
        bail!("--charset can't be empty");
    }

    set_seed(args.seed.unwrap_or_else(seed_from_system_time));
    info!("fuzzing with seed {}", current_seed());

    let random = RandomStringGenerator::with_len_and_charset(lengths, &args.charset);
    let grammar = GrammarGenerator::with_depth_and_alphabet(args.max_depth, LITERAL_ALPHABET);

    let mut edits = RandomEdit::new();
    edits.add(InsertEdit::appending(RandomStringGenerator::with_len_and_charset(1..3, &args.charset)));
    edits.add(InsertEdit::anywhere(RandomStringGenerator::with_len_and_charset(1..3, &args.charset)));
    edits.add(SpliceEdit::replacing(RandomStringGenerator::with_len_and_charset(0..3, &args.charset)));
    edits.add(SpliceEdit::erasing());

    let checker = Checker::with_strict(args.strict);
    let mut violations = 0usize;

    for i in 0..args.iterations {
        let (pattern, must_parse) = match i % 3 {
            0 => (random.generate(), random.generates_valid()),
            1 => (grammar.generate(), grammar.generates_valid()),
            _ => {
                let valid = grammar.generate();
                let (range, inserted) = edits.make_edit(&valid);
                (apply_edit(&valid, range, &inserted), false)
            },
        };
        debug!("#{}: {:?}", i, pattern);

        if let Err(violation) = checker.check(&pattern, must_parse) {
            violations += 1;
            error!("{}", violation);
            if args.fail_fast {
                break;
            }
        }
    }

    if violations > 0 {
        bail!("{} violation(s) found with seed {}", violations, current_seed());
    }
    info!("{} patterns checked, no violations", args.iterations);
    Ok(())
}
