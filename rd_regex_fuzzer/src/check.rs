/**
 * Properties every parse has to satisfy, whatever the input.
 */

use std::panic::{self, AssertUnwindSafe};
use log::debug;
use thiserror::Error;
use rd_regex_parse::{CharClassFactory, ParseError, ParseResult, Node, CharClass, Parser, ParserConfig};

#[derive(Debug, Error)]
pub enum Violation {
    #[error("parser panicked on {pattern:?}")]
    Panicked { pattern: String },

    #[error("{pattern:?} parsed differently on a second run")]
    Nondeterministic { pattern: String },

    #[error("{pattern:?} failed at offset {offset}, past its {len} characters")]
    OffsetOutOfBounds { pattern: String, offset: usize, len: usize },

    #[error("{pattern:?} produced {size} nodes from {len} characters")]
    OversizedTree { pattern: String, size: usize, len: usize },

    #[error("well-formed {pattern:?} was rejected")]
    RejectedValid {
        pattern: String,
        #[source]
        source: ParseError,
    },

    #[error("{pattern:?} was accepted strictly but parsed differently when lenient")]
    ModeMismatch { pattern: String },
}

pub struct Checker {
    lenient: Parser<CharClassFactory>,
    strict: Parser<CharClassFactory>,
    /// Whether well-formed patterns have to be consumed entirely.
    require_strict: bool,
}

impl Checker {
    pub fn new() -> Self {
        Self::with_strict(false)
    }

    pub fn with_strict(require_strict: bool) -> Self {
        Self{
            lenient: Parser::new(CharClassFactory),
            strict: Parser::with_config(CharClassFactory, ParserConfig::strict()),
            require_strict,
        }
    }

    /// Runs one pattern through both parsers. `must_parse` marks patterns
    /// known to be well-formed, which have to be accepted by the strict
    /// parser if `require_strict` is set, by the lenient one otherwise.
    pub fn check(&self, pattern: &str, must_parse: bool) -> Result<(), Violation> {
        let len = pattern.chars().count();

        let lenient = self.analyze(&self.lenient, pattern)?;
        if self.analyze(&self.lenient, pattern)? != lenient {
            return Err(Violation::Nondeterministic{ pattern: pattern.into() });
        }
        let strict = self.analyze(&self.strict, pattern)?;

        for result in [&lenient, &strict].iter() {
            if let Err(err) = result {
                if err.offset() > len {
                    return Err(Violation::OffsetOutOfBounds{
                        pattern: pattern.into(), offset: err.offset(), len,
                    });
                }
            }
        }

        // Every leaf eats at least one character and every star its '*',
        // so a tree never has more than two nodes per character
        if let Ok(tree) = &lenient {
            let size = tree.size();
            debug!("{:?}: {} nodes, depth {}", pattern, size, tree.depth());
            if size > 2 * len {
                return Err(Violation::OversizedTree{ pattern: pattern.into(), size, len });
            }
        }

        if let Ok(tree) = &strict {
            if lenient.as_ref().ok() != Some(tree) {
                return Err(Violation::ModeMismatch{ pattern: pattern.into() });
            }
        }

        if must_parse {
            let verdict = if self.require_strict { strict } else { lenient };
            if let Err(source) = verdict {
                return Err(Violation::RejectedValid{ pattern: pattern.into(), source });
            }
        }

        Ok(())
    }

    fn analyze(&self, parser: &Parser<CharClassFactory>, pattern: &str)
        -> Result<ParseResult<Node<CharClass>>, Violation> {

        panic::catch_unwind(AssertUnwindSafe(|| parser.analyze(pattern)))
            .map_err(|_| Violation::Panicked{ pattern: pattern.into() })
    }
}
