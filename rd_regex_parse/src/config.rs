/**
 * Parser configuration.
 */

/// What to do with input left over once the top-level expression ends,
/// like the `)` in `a)` or the second star in `a**`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingInputPolicy {
    /// Return the expression parsed so far and drop the rest.
    Ignore,
    /// Fail with `ParseErrorKind::TrailingInput`.
    Reject,
}

impl Default for TrailingInputPolicy {
    fn default() -> Self {
        TrailingInputPolicy::Ignore
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub trailing_input: TrailingInputPolicy,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that requires the whole pattern to be consumed.
    pub fn strict() -> Self {
        Self::new().with_trailing_input(TrailingInputPolicy::Reject)
    }

    pub fn with_trailing_input(mut self, policy: TrailingInputPolicy) -> Self {
        self.trailing_input = policy;
        self
    }
}
