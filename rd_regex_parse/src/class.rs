/**
 * A character class symbol backed by a code point set.
 */

use rd_intervals::{CodePointRange, CodePointSet};
use crate::symbol::{SymbolBuilder, SymbolFactory};

/// An immutable set of characters a literal node can match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharClass {
    set: CodePointSet,
}

impl CharClass {
    pub fn contains(&self, c: char) -> bool {
        self.set.contains(c)
    }

    /// The normalized ranges: sorted, disjunct and non-touching.
    pub fn ranges(&self) -> &[CodePointRange] {
        self.set.ranges()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Checks if the class matches exactly one character, returning it.
    pub fn as_single(&self) -> Option<char> {
        match self.set.ranges() {
            [r] if r.is_single() => Some(r.start()),
            _ => None,
        }
    }
}

impl From<CodePointSet> for CharClass {
    fn from(set: CodePointSet) -> Self {
        Self{ set }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClassFactory;

impl CharClassFactory {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolFactory for CharClassFactory {
    type Symbol = CharClass;
    type Builder = CharClassBuilder;

    fn new_symbol(&self) -> CharClassBuilder {
        CharClassBuilder::new()
    }
}

/// Builds a `CharClass`. Excluded ranges are collected like included ones
/// and the whole set is inverted on `finish`, so mixing `include` and
/// `exclude` yields the complement of everything given.
#[derive(Debug, Clone, Default)]
pub struct CharClassBuilder {
    set: CodePointSet,
    inverted: bool,
}

impl CharClassBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SymbolBuilder for CharClassBuilder {
    type Symbol = CharClass;

    fn include(mut self, ranges: &[CodePointRange]) -> Self {
        self.set.extend(ranges.iter().cloned());
        self
    }

    fn exclude(mut self, ranges: &[CodePointRange]) -> Self {
        self.set.extend(ranges.iter().cloned());
        self.inverted = true;
        self
    }

    fn finish(mut self) -> CharClass {
        if self.inverted {
            self.set.invert();
        }
        CharClass{ set: self.set }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
