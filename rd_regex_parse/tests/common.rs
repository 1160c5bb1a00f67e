#![allow(dead_code)]

use rd_regex_parse::{CharClass, CharClassFactory, CodePointRange, Node, SymbolBuilder, SymbolFactory};

pub type Tree = Node<CharClass>;

pub fn class(ranges: &[CodePointRange]) -> CharClass {
    CharClassFactory.new_symbol().include(ranges).finish()
}

pub fn negated(ranges: &[CodePointRange]) -> CharClass {
    CharClassFactory.new_symbol().exclude(ranges).finish()
}

pub fn range(start: char, end: char) -> CodePointRange {
    CodePointRange::new(start, end).unwrap()
}

pub fn ch(c: char) -> Tree {
    Node::Literal(class(&[CodePointRange::single(c)]))
}

pub fn alt(first: Tree, second: Tree) -> Tree {
    Node::alternation(first, second)
}

pub fn seq(first: Tree, second: Tree) -> Tree {
    Node::concatenation(first, second)
}

pub fn star(subnode: Tree) -> Tree {
    Node::star(subnode)
}
