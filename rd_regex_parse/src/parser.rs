/**
 * A recursive-descent parser turning a pattern string into a regex AST.
 */

use log::{debug, trace};
use rd_intervals::CodePointRange;
use crate::ast::Node;
use crate::config::{ParserConfig, TrailingInputPolicy};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::symbol::{SymbolBuilder, SymbolFactory};

/*
 * Reference grammar for the parser:
 *
 * union       ::= concat ('|' concat)*
 *               ;
 *
 * concat      ::= repetition+
 *               ;
 *
 * repetition  ::= atom '*'?
 *               ;
 *
 * atom        ::=
 *               | LITERAL
 *               | '(' union ')'
 *               | class
 *               | 'ε'
 *               | '∅'
 *               ;
 *
 * class       ::= '[' '^'? class_item* ']'
 *               ;
 *
 * class_item  ::= LITERAL ('-' LITERAL)?
 *               ;
 *
 * LITERAL is any alphanumeric character or '_'.
 *
 * Both binary operators fold to the left. Nesting depth of groups is bounded
 * only by the call stack.
 */

/// Matches only the empty string.
pub const EMPTY_WORD: char = 'ε';
/// Matches nothing.
pub const EMPTY_SET: char = '∅';

/// The scan state of a single parse. Offsets count characters.
#[derive(Clone)]
struct Cursor<'a> {
    chars: std::str::Chars<'a>,
    offset: usize,
}

impl <'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self{ chars: source.chars(), offset: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn is_at(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += 1;
        Some(c)
    }

    /// Consumes `c` if it's next.
    fn eat(&mut self, c: char) -> bool {
        if self.is_at(c) {
            self.bump();
            true
        }
        else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        if self.eat(expected) {
            Ok(())
        }
        else {
            Err(self.error(ParseErrorKind::ExpectedCharacterMismatch{ expected, found: self.peek() }))
        }
    }

    fn expect_literal(&mut self) -> ParseResult<char> {
        match self.peek() {
            Some(c) if is_literal(c) => {
                self.bump();
                Ok(c)
            },
            found => Err(self.error(ParseErrorKind::ExpectedLiteralMismatch{ found })),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.offset)
    }
}

/// Characters that stand for themselves.
pub fn is_literal(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters that let a concatenation continue. `ε` is alphanumeric, so it
/// continues one, while `∅` does not.
fn starts_repetition(c: char) -> bool {
    is_literal(c) || c == '(' || c == '['
}

/**
 * Actual parsing.
 */

/// Parses patterns, building the character classes through `F`.
///
/// The parser keeps no state between calls, so a single instance can be
/// shared freely between threads as long as the factory allows it.
#[derive(Debug, Clone)]
pub struct Parser<F> {
    factory: F,
    config: ParserConfig,
}

impl <F> Parser<F> where F : SymbolFactory {
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, ParserConfig::default())
    }

    pub fn with_config(factory: F, config: ParserConfig) -> Self {
        Self{ factory, config }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a whole pattern into its syntax tree, failing on the first
    /// grammar violation.
    ///
    /// Unless the configuration rejects trailing input, parsing stops at the
    /// first character that can't continue the expression and the rest of
    /// the pattern is ignored.
    pub fn analyze(&self, pattern: &str) -> ParseResult<Node<F::Symbol>> {
        debug!("analyzing pattern {:?}", pattern);

        let mut cursor = Cursor::new(pattern);
        let root = self.parse_union(&mut cursor)?;

        if let Some(rest) = cursor.peek() {
            match self.config.trailing_input {
                TrailingInputPolicy::Ignore =>
                    debug!("ignoring trailing input of {:?} at offset {}", pattern, cursor.offset),
                TrailingInputPolicy::Reject =>
                    return Err(cursor.error(ParseErrorKind::TrailingInput(rest))),
            }
        }

        debug!("parsed {:?}", pattern);
        Ok(root)
    }

    fn parse_union(&self, cursor: &mut Cursor<'_>) -> ParseResult<Node<F::Symbol>> {
        trace!("union at {}", cursor.offset);
        let mut node = self.parse_concat(cursor)?;
        while cursor.eat('|') {
            let second = self.parse_concat(cursor)?;
            node = Node::alternation(node, second);
        }
        Ok(node)
    }

    fn parse_concat(&self, cursor: &mut Cursor<'_>) -> ParseResult<Node<F::Symbol>> {
        trace!("concat at {}", cursor.offset);
        let mut node = self.parse_repetition(cursor)?;
        while cursor.peek().map_or(false, starts_repetition) {
            let second = self.parse_repetition(cursor)?;
            node = Node::concatenation(node, second);
        }
        Ok(node)
    }

    fn parse_repetition(&self, cursor: &mut Cursor<'_>) -> ParseResult<Node<F::Symbol>> {
        trace!("repetition at {}", cursor.offset);
        let atom = self.parse_atom(cursor)?;
        if cursor.eat('*') {
            Ok(Node::star(atom))
        }
        else {
            Ok(atom)
        }
    }

    fn parse_atom(&self, cursor: &mut Cursor<'_>) -> ParseResult<Node<F::Symbol>> {
        trace!("atom at {}", cursor.offset);
        let c = match cursor.peek() {
            Some(c) => c,
            None => return Err(cursor.error(ParseErrorKind::UnexpectedEnd)),
        };

        match c {
            // The sentinels come first, 'ε' would pass as a literal
            EMPTY_WORD => {
                cursor.bump();
                Ok(Node::EmptyWord)
            },

            EMPTY_SET => {
                cursor.bump();
                Ok(Node::EmptySet)
            },

            '(' => {
                cursor.bump();
                let node = self.parse_union(cursor)?;
                cursor.expect(')')?;
                Ok(node)
            },

            '[' => {
                cursor.bump();
                self.parse_class(cursor)
            },

            c if is_literal(c) => {
                cursor.bump();
                let symbol = self.factory.new_symbol()
                    .include(&[CodePointRange::single(c)])
                    .finish();
                Ok(Node::Literal(symbol))
            },

            c => Err(cursor.error(ParseErrorKind::UnknownCharacter(c))),
        }
    }

    /// Parses the class body after the opening bracket.
    fn parse_class(&self, cursor: &mut Cursor<'_>) -> ParseResult<Node<F::Symbol>> {
        trace!("class at {}", cursor.offset);
        let negated = cursor.eat('^');

        let mut ranges = Vec::new();
        while !cursor.is_at(']') {
            let start_offset = cursor.offset;
            let start = cursor.expect_literal()?;
            let range = if cursor.eat('-') {
                let end = cursor.expect_literal()?;
                CodePointRange::new(start, end).ok_or_else(||
                    ParseError::new(ParseErrorKind::InvertedRange{ start, end }, start_offset))?
            }
            else {
                CodePointRange::single(start)
            };
            ranges.push(range);
        }
        cursor.expect(']')?;

        let builder = self.factory.new_symbol();
        let builder = if negated {
            builder.exclude(&ranges)
        }
        else {
            builder.include(&ranges)
        };
        Ok(Node::Literal(builder.finish()))
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod regex_parser_tests {
    use super::*;
    use std::cell::Cell;

    /**
     * A factory that records how every symbol was built.
     */

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Include(Vec<CodePointRange>),
        Exclude(Vec<CodePointRange>),
    }

    #[derive(Default)]
    struct Recorder {
        built: Cell<usize>,
    }

    struct RecordingBuilder(Vec<Call>);

    impl SymbolFactory for Recorder {
        type Symbol = Vec<Call>;
        type Builder = RecordingBuilder;

        fn new_symbol(&self) -> RecordingBuilder {
            self.built.set(self.built.get() + 1);
            RecordingBuilder(Vec::new())
        }
    }

    impl SymbolBuilder for RecordingBuilder {
        type Symbol = Vec<Call>;

        fn include(mut self, ranges: &[CodePointRange]) -> Self {
            self.0.push(Call::Include(ranges.to_vec()));
            self
        }

        fn exclude(mut self, ranges: &[CodePointRange]) -> Self {
            self.0.push(Call::Exclude(ranges.to_vec()));
            self
        }

        fn finish(self) -> Vec<Call> {
            self.0
        }
    }

    fn parse(source: &str) -> ParseResult<Node<Vec<Call>>> {
        Parser::new(Recorder::default()).analyze(source)
    }

    fn parse_strict(source: &str) -> ParseResult<Node<Vec<Call>>> {
        Parser::with_config(Recorder::default(), ParserConfig::strict()).analyze(source)
    }

    /**
     * Helpers to construct results.
     */

    fn alt(first: Node<Vec<Call>>, second: Node<Vec<Call>>) -> Node<Vec<Call>> {
        Node::alternation(first, second)
    }

    fn seq(first: Node<Vec<Call>>, second: Node<Vec<Call>>) -> Node<Vec<Call>> {
        Node::concatenation(first, second)
    }

    fn star(subnode: Node<Vec<Call>>) -> Node<Vec<Call>> {
        Node::star(subnode)
    }

    fn ch(c: char) -> Node<Vec<Call>> {
        Node::Literal(vec![Call::Include(vec![CodePointRange::single(c)])])
    }

    fn rng(a: char, b: char) -> CodePointRange {
        CodePointRange::new(a, b).unwrap()
    }

    fn single(c: char) -> CodePointRange {
        CodePointRange::single(c)
    }

    fn err(kind: ParseErrorKind, offset: usize) -> ParseResult<Node<Vec<Call>>> {
        Err(ParseError::new(kind, offset))
    }

    /**
     * Structure.
     */

    #[test]
    fn a() {
        assert_eq!(parse(r"a"), Ok(ch('a')));
    }

    #[test]
    fn digit_and_underscore() {
        assert_eq!(parse(r"7"), Ok(ch('7')));
        assert_eq!(parse(r"_"), Ok(ch('_')));
    }

    #[test]
    fn a_or_b() {
        assert_eq!(parse(r"a|b"), Ok(alt(ch('a'), ch('b'))));
    }

    #[test]
    fn a_or_b_or_c() {
        assert_eq!(parse(r"a|b|c"), Ok(alt(alt(ch('a'), ch('b')), ch('c'))));
    }

    #[test]
    fn ab() {
        assert_eq!(parse(r"ab"), Ok(seq(ch('a'), ch('b'))));
    }

    #[test]
    fn abc() {
        assert_eq!(parse(r"abc"), Ok(seq(seq(ch('a'), ch('b')), ch('c'))));
    }

    #[test]
    fn ab_or_cd() {
        assert_eq!(parse(r"ab|cd"), Ok(alt(seq(ch('a'), ch('b')), seq(ch('c'), ch('d')))));
    }

    #[test]
    fn a_or_b_then_c() {
        assert_eq!(parse(r"(a|b)c"), Ok(seq(alt(ch('a'), ch('b')), ch('c'))));
    }

    #[test]
    fn a_b_or_c_d() {
        assert_eq!(parse(r"a(b|c)d"), Ok(seq(seq(ch('a'), alt(ch('b'), ch('c'))), ch('d'))));
    }

    #[test]
    fn a_zero_or_more() {
        assert_eq!(parse(r"a*"), Ok(star(ch('a'))));
    }

    #[test]
    fn a_then_b_zero_or_more() {
        assert_eq!(parse(r"ab*"), Ok(seq(ch('a'), star(ch('b')))));
    }

    #[test]
    fn ab_zero_or_more() {
        assert_eq!(parse(r"(ab)*"), Ok(star(seq(ch('a'), ch('b')))));
    }

    #[test]
    fn nested_groups() {
        assert_eq!(parse(r"((a))"), Ok(ch('a')));
    }

    #[test]
    fn empty_word() {
        assert_eq!(parse("ε"), Ok(Node::EmptyWord));
    }

    #[test]
    fn empty_set() {
        assert_eq!(parse("∅"), Ok(Node::EmptySet));
    }

    #[test]
    fn empty_word_continues_concatenation() {
        assert_eq!(parse("aε"), Ok(seq(ch('a'), Node::EmptyWord)));
    }

    #[test]
    fn empty_set_starts_concatenation() {
        assert_eq!(parse("∅a"), Ok(seq(Node::EmptySet, ch('a'))));
    }

    #[test]
    fn empty_set_or_empty_word_starred() {
        assert_eq!(parse("∅|ε*"), Ok(alt(Node::EmptySet, star(Node::EmptyWord))));
    }

    #[test]
    fn non_ascii_letter() {
        assert_eq!(parse("é"), Ok(ch('é')));
    }

    /**
     * Character classes.
     */

    #[test]
    fn a_to_z_class() {
        assert_eq!(parse(r"[a-z]"), Ok(Node::Literal(vec![Call::Include(vec![rng('a', 'z')])])));
    }

    #[test]
    fn negated_class() {
        assert_eq!(
            parse(r"[^a-z0-9_]"),
            Ok(Node::Literal(vec![Call::Exclude(vec![rng('a', 'z'), rng('0', '9'), single('_')])]))
        );
    }

    #[test]
    fn abc_class() {
        assert_eq!(
            parse(r"[abc]"),
            Ok(Node::Literal(vec![Call::Include(vec![single('a'), single('b'), single('c')])]))
        );
    }

    #[test]
    fn empty_class() {
        assert_eq!(parse(r"[]"), Ok(Node::Literal(vec![Call::Include(vec![])])));
        assert_eq!(parse(r"[^]"), Ok(Node::Literal(vec![Call::Exclude(vec![])])));
    }

    #[test]
    fn class_then_star() {
        assert_eq!(
            parse(r"x[a-c]*"),
            Ok(seq(ch('x'), star(Node::Literal(vec![Call::Include(vec![rng('a', 'c')])]))))
        );
    }

    #[test]
    fn one_symbol_per_literal() {
        let parser = Parser::new(Recorder::default());
        parser.analyze(r"a[bc]d|e*").unwrap();
        assert_eq!(parser.factory().built.get(), 4);
    }

    /**
     * Errors.
     */

    #[test]
    fn unknown_character() {
        assert_eq!(parse(r"$"), err(ParseErrorKind::UnknownCharacter('$'), 0));
    }

    #[test]
    fn empty_pattern() {
        assert_eq!(parse(r""), err(ParseErrorKind::UnexpectedEnd, 0));
    }

    #[test]
    fn missing_close_paren() {
        assert_eq!(
            parse(r"(a"),
            err(ParseErrorKind::ExpectedCharacterMismatch{ expected: ')', found: None }, 2)
        );
    }

    #[test]
    fn wrong_close_paren() {
        assert_eq!(
            parse(r"(a]"),
            err(ParseErrorKind::ExpectedCharacterMismatch{ expected: ')', found: Some(']') }, 2)
        );
    }

    #[test]
    fn dangling_alternation() {
        assert_eq!(parse(r"a|"), err(ParseErrorKind::UnexpectedEnd, 2));
    }

    #[test]
    fn empty_group() {
        assert_eq!(parse(r"()"), err(ParseErrorKind::UnknownCharacter(')'), 1));
    }

    #[test]
    fn leading_star() {
        assert_eq!(parse(r"*a"), err(ParseErrorKind::UnknownCharacter('*'), 0));
    }

    #[test]
    fn unterminated_class() {
        assert_eq!(parse(r"[ab"), err(ParseErrorKind::ExpectedLiteralMismatch{ found: None }, 3));
    }

    #[test]
    fn non_literal_in_class() {
        assert_eq!(
            parse(r"[a*]"),
            err(ParseErrorKind::ExpectedLiteralMismatch{ found: Some('*') }, 2)
        );
    }

    #[test]
    fn open_range_in_class() {
        assert_eq!(
            parse(r"[a-]"),
            err(ParseErrorKind::ExpectedLiteralMismatch{ found: Some(']') }, 3)
        );
    }

    #[test]
    fn inverted_range_in_class() {
        assert_eq!(
            parse(r"x[bz-a]"),
            err(ParseErrorKind::InvertedRange{ start: 'z', end: 'a' }, 3)
        );
    }

    #[test]
    fn offset_counts_characters() {
        assert_eq!(parse("[éε$]"), err(ParseErrorKind::ExpectedLiteralMismatch{ found: Some('$') }, 3));
    }

    /**
     * Trailing input.
     */

    #[test]
    fn trailing_input_is_ignored() {
        assert_eq!(parse(r"a)"), Ok(ch('a')));
        assert_eq!(parse(r"a**"), Ok(star(ch('a'))));
        assert_eq!(parse("a∅"), Ok(ch('a')));
    }

    #[test]
    fn trailing_input_is_rejected_in_strict_mode() {
        assert_eq!(parse_strict(r"a)"), err(ParseErrorKind::TrailingInput(')'), 1));
        assert_eq!(parse_strict(r"a**"), err(ParseErrorKind::TrailingInput('*'), 2));
        assert_eq!(parse_strict("a∅"), err(ParseErrorKind::TrailingInput('∅'), 1));
    }

    #[test]
    fn strict_mode_accepts_complete_patterns() {
        assert_eq!(parse_strict(r"(a|b)*c"), parse(r"(a|b)*c"));
    }

    /**
     * Logging.
     */

    struct CapturingLogger {
        lines: std::sync::Mutex<Vec<String>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) { }
    }

    static LOGGER: CapturingLogger = CapturingLogger{ lines: std::sync::Mutex::new(Vec::new()) };

    #[test]
    fn analyze_logs_start_finish_and_productions() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        parse(r"qq*").unwrap();

        let lines = LOGGER.lines.lock().unwrap();
        assert!(lines.iter().any(|l| l == r#"analyzing pattern "qq*""#));
        assert!(lines.iter().any(|l| l == r#"parsed "qq*""#));
        assert!(lines.iter().any(|l| l == "repetition at 1"));
    }

    /**
     * Reuse.
     */

    #[test]
    fn reused_parser_is_deterministic() {
        let parser = Parser::new(Recorder::default());
        let first = parser.analyze(r"(a|[^b-d])*e");
        let _ = parser.analyze(r"(((");
        let second = parser.analyze(r"(a|[^b-d])*e");
        assert_eq!(first, second);
        assert!(first.is_ok());
    }
}
