/**
 * Stores a set of disjunct code point ranges, unifying them when possible.
 */

use std::iter::FromIterator;
use crate::range::{CodePointRange, successor, predecessor};

/// A normalized set of code points. The stored ranges are sorted, disjunct
/// and never touching, so two sets are equal exactly when they contain the
/// same code points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePointSet {
    ranges: Vec<CodePointRange>,
}

impl CodePointSet {
    pub fn new() -> Self {
        Self{ ranges: Vec::new() }
    }

    /// The set of every scalar value.
    pub fn full() -> Self {
        Self{ ranges: vec![CodePointRange::full()] }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodePointRange> {
        self.ranges.iter()
    }

    pub fn contains(&self, c: char) -> bool {
        let idx = self.ranges.partition_point(|r| r.end() < c);
        idx < self.ranges.len() && self.ranges[idx].start() <= c
    }

    /// Number of scalar values in the set.
    pub fn len(&self) -> usize {
        self.ranges.iter()
            .map(|r| {
                let width = r.end() as usize - r.start() as usize + 1;
                // Ranges spanning the surrogate block don't contain those values
                if r.contains('\u{D7FF}') && r.contains('\u{E000}') { width - 0x800 } else { width }
            })
            .sum()
    }
}

impl CodePointSet {
    /// Inserts a range into the set, unifying every touching and overlapping
    /// entry.
    pub fn insert(&mut self, value: CodePointRange) {
        // Entries that end before the value without touching it
        let from = self.ranges.partition_point(|r| match successor(r.end()) {
            Some(next) => next < value.start(),
            None => false,
        });
        // Entries that start before the value's end or touch it
        let to = self.ranges.partition_point(|r|
            r.start() <= value.end() || Some(r.start()) == successor(value.end()));

        if from == to {
            // Intersects or touches nothing, just insert
            self.ranges.insert(from, value);
        }
        else {
            // Unify with every entry in between
            let unified = self.ranges[from..to].iter().fold(value, |acc, r| acc.hull(r));
            self.ranges.splice(from..to, std::iter::once(unified));
        }
    }

    /// Replaces the set with its complement over the scalar values.
    pub fn invert(&mut self) {
        let mut inverted = Vec::with_capacity(self.ranges.len() + 1);
        // First value not yet covered by an earlier range or gap
        let mut next = Some('\0');

        for r in &self.ranges {
            if let Some(lower) = next {
                if lower < r.start() {
                    if let Some(upper) = predecessor(r.start()) {
                        inverted.extend(CodePointRange::new(lower, upper));
                    }
                }
            }
            next = successor(r.end());
        }
        if let Some(lower) = next {
            inverted.extend(CodePointRange::new(lower, char::MAX));
        }

        self.ranges = inverted;
    }
}

impl Extend<CodePointRange> for CodePointSet {
    fn extend<I>(&mut self, iter: I) where I : IntoIterator<Item = CodePointRange> {
        for r in iter {
            self.insert(r);
        }
    }
}

impl FromIterator<CodePointRange> for CodePointSet {
    fn from_iter<I>(iter: I) -> Self where I : IntoIterator<Item = CodePointRange> {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for CodePointSet {
    type Item = CodePointRange;
    type IntoIter = std::vec::IntoIter<CodePointRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl <'a> IntoIterator for &'a CodePointSet {
    type Item = &'a CodePointRange;
    type IntoIter = std::slice::Iter<'a, CodePointRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
