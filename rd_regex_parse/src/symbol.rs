/**
 * The interface the parser builds character-class symbols through.
 */

use rd_intervals::CodePointRange;

/// Hands out a fresh builder for every symbol the parser constructs.
pub trait SymbolFactory {
    type Symbol;
    type Builder : SymbolBuilder<Symbol = Self::Symbol>;

    fn new_symbol(&self) -> Self::Builder;
}

/// Collects the ranges of one symbol. The parser calls exactly one of
/// `include` or `exclude` per symbol, then `finish`.
pub trait SymbolBuilder : Sized {
    type Symbol;

    /// The symbol matches the given ranges.
    fn include(self, ranges: &[CodePointRange]) -> Self;

    /// The symbol matches everything except the given ranges.
    fn exclude(self, ranges: &[CodePointRange]) -> Self;

    /// Freezes the builder into an immutable symbol.
    fn finish(self) -> Self::Symbol;
}

impl <'a, F> SymbolFactory for &'a F where F : SymbolFactory + ?Sized {
    type Symbol = F::Symbol;
    type Builder = F::Builder;

    fn new_symbol(&self) -> Self::Builder {
        (**self).new_symbol()
    }
}
