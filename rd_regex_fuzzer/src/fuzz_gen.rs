/**
 * Edit strategies, mutating a pattern into a likely malformed one.
 */

use std::ops::Range;
use crate::rnd::*;
use crate::str_gen::*;

/// Ranges are in characters, not bytes.
pub trait FuzzStrategy {
    fn make_edit(&self, src: &str) -> (Range<usize>, String);
}

/// Replaces the characters in `range` with `inserted`.
pub fn apply_edit(src: &str, range: Range<usize>, inserted: &str) -> String {
    let mut result: String = src.chars().take(range.start).collect();
    result.push_str(inserted);
    result.extend(src.chars().skip(range.end));
    result
}

/// A random, possibly empty, range of character positions in `src`.
fn random_span(src: &str) -> Range<usize> {
    let len = src.chars().count();
    let start = rand_range(&(0..(len + 1)));
    let end = rand_range(&(start..(len + 1)));
    start..end
}

/**
 * Inserting generated text, either at the end or anywhere.
 */

pub struct InsertEdit {
    gen: Box<dyn StringGenStrategy>,
    at_end: bool,
}

impl InsertEdit {
    pub fn appending<G>(g: G) -> Self where G : StringGenStrategy + 'static {
        Self{ gen: Box::new(g), at_end: true }
    }

    pub fn anywhere<G>(g: G) -> Self where G : StringGenStrategy + 'static {
        Self{ gen: Box::new(g), at_end: false }
    }
}

impl FuzzStrategy for InsertEdit {
    fn make_edit(&self, src: &str) -> (Range<usize>, String) {
        let len = src.chars().count();
        let offs = if self.at_end { len } else { rand_range(&(0..(len + 1))) };
        (offs..offs, self.gen.generate())
    }
}

/**
 * Replacing a random span, with generated text or nothing.
 */

pub struct SpliceEdit {
    gen: Option<Box<dyn StringGenStrategy>>,
}

impl SpliceEdit {
    pub fn replacing<G>(g: G) -> Self where G : StringGenStrategy + 'static {
        Self{ gen: Some(Box::new(g)) }
    }

    pub fn erasing() -> Self {
        Self{ gen: None }
    }
}

impl FuzzStrategy for SpliceEdit {
    fn make_edit(&self, src: &str) -> (Range<usize>, String) {
        let inserted = self.gen.as_ref().map(|g| g.generate()).unwrap_or_default();
        (random_span(src), inserted)
    }
}

/**
 * Chooses from a collection of strategies and uses that.
 */

pub struct RandomEdit {
    strats: Vec<Box<dyn FuzzStrategy>>,
}

impl RandomEdit {
    pub fn new() -> Self {
        Self{ strats: Vec::new() }
    }

    pub fn add<G>(&mut self, g: G) where G : FuzzStrategy + 'static {
        self.strats.push(Box::new(g));
    }
}

impl FuzzStrategy for RandomEdit {
    fn make_edit(&self, src: &str) -> (Range<usize>, String) {
        sample(&self.strats).make_edit(src)
    }
}
