/**
 * Inclusive code point ranges.
 */

use std::cmp::Ordering;

/// Last scalar value before the surrogate block.
const BEFORE_SURROGATES: char = '\u{D7FF}';
/// First scalar value after the surrogate block.
const AFTER_SURROGATES: char = '\u{E000}';

/// An inclusive range of code points. A single character is a range where
/// `start == end`. The constructor refuses inverted pairs, so `start <= end`
/// always holds.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct CodePointRange {
    start: char,
    end: char,
}

/**
 * Stepping over the scalar values. The surrogate block has no `char`
 * representation, so the two scalars around it are neighbours.
 */

/// The scalar value right after `c`, if any.
pub fn successor(c: char) -> Option<char> {
    match c {
        BEFORE_SURROGATES => Some(AFTER_SURROGATES),
        char::MAX => None,
        _ => std::char::from_u32(c as u32 + 1),
    }
}

/// The scalar value right before `c`, if any.
pub fn predecessor(c: char) -> Option<char> {
    match c {
        AFTER_SURROGATES => Some(BEFORE_SURROGATES),
        '\0' => None,
        _ => std::char::from_u32(c as u32 - 1),
    }
}

/**
 * Construction.
 */

impl CodePointRange {
    /// Creates the range `start..=end`, or `None` if `end` precedes `start`.
    pub fn new(start: char, end: char) -> Option<Self> {
        if start <= end {
            Some(Self{ start, end })
        }
        else {
            None
        }
    }

    pub fn single(c: char) -> Self {
        Self{ start: c, end: c }
    }

    /// Every scalar value.
    pub fn full() -> Self {
        Self{ start: '\0', end: char::MAX }
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }
}

impl From<char> for CodePointRange {
    fn from(c: char) -> Self {
        Self::single(c)
    }
}

/**
 * Observers.
 */

impl CodePointRange {
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    /// Checks if this range ends strictly before `other` begins. Touching
    /// ranges count as before.
    pub fn is_before(&self, other: &Self) -> bool {
        self.end < other.start
    }

    pub fn is_disjunct(&self, other: &Self) -> bool {
        self.is_before(other) || other.is_before(self)
    }

    /// Checks if the two ranges are disjunct but have no scalar value between
    /// them.
    pub fn is_touching(&self, other: &Self) -> bool {
        successor(self.end) == Some(other.start) || successor(other.end) == Some(self.start)
    }

    /// Checks if the union of the two ranges is itself a range.
    pub fn is_mergeable(&self, other: &Self) -> bool {
        !self.is_disjunct(other) || self.is_touching(other)
    }

    /// The smallest range covering both.
    pub fn hull(&self, other: &Self) -> Self {
        Self{
            start: std::cmp::min(self.start, other.start),
            end: std::cmp::max(self.end, other.end),
        }
    }
}

/// Ranges are ordered by their start, then by their end.
impl PartialOrd for CodePointRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CodePointRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start).then(self.end.cmp(&other.end))
    }
}

impl std::fmt::Debug for CodePointRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_single() {
            write!(f, "{:?}", self.start)
        }
        else {
            write!(f, "[{:?}; {:?}]", self.start, self.end)
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
