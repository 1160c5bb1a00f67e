/**
 * Pattern generation strategies.
 */

use std::ops::Range;
use rd_regex_parse::{EMPTY_SET, EMPTY_WORD};
use crate::rnd::*;

pub trait StringGenStrategy {
    fn generate(&self) -> String;

    /// Whether every generated pattern is a complete, well-formed expression.
    fn generates_valid(&self) -> bool {
        false
    }
}

/**
 * Random string from a charset.
 */

pub struct RandomStringGenerator {
    len: Range<usize>,
    charset: Vec<char>,
}

impl RandomStringGenerator {
    pub fn with_len_and_charset(len: Range<usize>, charset: &str) -> Self {
        Self{ len, charset: charset.chars().collect() }
    }
}

impl StringGenStrategy for RandomStringGenerator {
    fn generate(&self) -> String {
        rand_string(&self.len, &self.charset)
    }
}

/**
 * Well-formed patterns, generated top-down from the grammar.
 */

pub struct GrammarGenerator {
    max_depth: usize,
    alphabet: Vec<char>,
}

impl GrammarGenerator {
    /// `alphabet` must only contain literal characters.
    pub fn with_depth_and_alphabet(max_depth: usize, alphabet: &str) -> Self {
        Self{ max_depth, alphabet: alphabet.chars().collect() }
    }

    fn union(&self, depth: usize, out: &mut String) {
        let branches = if depth == 0 { 1 } else { rand_range(&(1..4)) };
        for i in 0..branches {
            if i > 0 {
                out.push('|');
            }
            self.concat(depth, out);
        }
    }

    fn concat(&self, depth: usize, out: &mut String) {
        // The empty set can't continue a concatenation, only start one
        if chance(1, 10) {
            out.push(EMPTY_SET);
        }
        else {
            self.repetition(depth, out);
        }
        for _ in 0..rand_range(&(0..3)) {
            self.repetition(depth, out);
        }
    }

    fn repetition(&self, depth: usize, out: &mut String) {
        self.atom(depth, out);
        if chance(1, 4) {
            out.push('*');
        }
    }

    fn atom(&self, depth: usize, out: &mut String) {
        // Groups only while there's depth left
        let kinds = if depth == 0 { 3 } else { 4 };
        match rand_range(&(0..kinds)) {
            0 => out.push(*sample(&self.alphabet)),
            1 => self.class(out),
            2 => out.push(EMPTY_WORD),
            _ => {
                out.push('(');
                self.union(depth - 1, out);
                out.push(')');
            },
        }
    }

    fn class(&self, out: &mut String) {
        out.push('[');
        if chance(1, 3) {
            out.push('^');
        }
        for _ in 0..rand_range(&(0..4)) {
            let a = *sample(&self.alphabet);
            if chance(1, 2) {
                let b = *sample(&self.alphabet);
                out.push(std::cmp::min(a, b));
                out.push('-');
                out.push(std::cmp::max(a, b));
            }
            else {
                out.push(a);
            }
        }
        out.push(']');
    }
}

impl StringGenStrategy for GrammarGenerator {
    fn generate(&self) -> String {
        let mut out = String::new();
        self.union(self.max_depth, &mut out);
        out
    }

    fn generates_valid(&self) -> bool {
        true
    }
}
