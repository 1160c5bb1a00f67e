/**
 * All of the regex syntax-tree (AST) data-structures.
 */

/// A node of the regex syntax tree. `S` is the symbol type the character
/// classes were built into. Every child is owned by its parent, so the tree
/// can't share nodes or contain cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node<S> {
    /// Matches no string at all.
    EmptySet,

    /// Matches only the empty string.
    EmptyWord,

    /// Matches exactly one character drawn from the symbol.
    Literal(S),

    Concatenation{
        first: Box<Node<S>>,
        second: Box<Node<S>>,
    },

    Alternation{
        first: Box<Node<S>>,
        second: Box<Node<S>>,
    },

    Star{
        subnode: Box<Node<S>>,
    },
}

/**
 * Constructors.
 */

impl <S> Node<S> {
    pub fn concatenation(first: Node<S>, second: Node<S>) -> Self {
        Node::Concatenation{ first: Box::new(first), second: Box::new(second) }
    }

    pub fn alternation(first: Node<S>, second: Node<S>) -> Self {
        Node::Alternation{ first: Box::new(first), second: Box::new(second) }
    }

    pub fn star(subnode: Node<S>) -> Self {
        Node::Star{ subnode: Box::new(subnode) }
    }
}

/**
 * Observers.
 */

impl <S> Node<S> {
    /// Number of nodes in the tree rooted here.
    pub fn size(&self) -> usize {
        match self {
            Node::EmptySet | Node::EmptyWord | Node::Literal(_) => 1,

              Node::Concatenation{ first, second }
            | Node::Alternation{ first, second } => 1 + first.size() + second.size(),

            Node::Star{ subnode } => 1 + subnode.size(),
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        match self {
            Node::EmptySet | Node::EmptyWord | Node::Literal(_) => 1,

              Node::Concatenation{ first, second }
            | Node::Alternation{ first, second } => 1 + std::cmp::max(first.depth(), second.depth()),

            Node::Star{ subnode } => 1 + subnode.depth(),
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
