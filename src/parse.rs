//! The grammar-side collaborator: turns a line of text into a labelled
//! syntax tree, or a structured parse error. The evaluator core never sees
//! raw text; it consumes the [`Node`] tree read-only.

use crate::tokens::{tokenize, Token, TokenizerError};
use std::fmt;
use std::iter::Peekable;
use std::slice;

/// Closed classification of syntax-tree nodes. The reader matches on this
/// exhaustively; there is no tag text to probe.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NodeKind {
    /// Synthetic root holding the line's top-level expressions.
    Root,
    /// A parenthesized expression list, including its bracket tokens.
    Sexpr,
    /// An integer literal, unvalidated text.
    Number,
    /// An operator token.
    Symbol,
    /// Bracket and other grammar-artifact tokens; elided by the reader.
    Punct,
}

/// One node of the labelled syntax tree produced by the parser.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub contents: String,
    pub children: Vec<Node>,
}

impl Node {
    fn leaf(kind: NodeKind, contents: &str) -> Self {
        Node {
            kind,
            contents: String::from(contents),
            children: Vec::new(),
        }
    }

    fn branch(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            kind,
            contents: String::new(),
            children,
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    Tokenizer(TokenizerError),
    UnmatchedCloseParen,
    UnclosedSexpr,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Tokenizer(e) => write!(f, "parse error: {}", e),
            Error::UnmatchedCloseParen => write!(f, "parse error: unmatched ')'"),
            Error::UnclosedSexpr => write!(f, "parse error: expected ')'"),
        }
    }
}

type Parser<'a> = Peekable<slice::Iter<'a, Token<'a>>>;

/// Parse one input line into a [`NodeKind::Root`] tree.
pub fn parse(input: &str) -> Result<Node, Error> {
    let tokens = tokenize(input).map_err(Error::Tokenizer)?;
    log::trace!("tokenized {:?}", tokens);
    let mut parser = tokens.iter().peekable();
    let mut children = Vec::new();
    while parser.peek().is_some() {
        children.push(parse_expr(&mut parser)?);
    }
    Ok(Node::branch(NodeKind::Root, children))
}

fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.next() {
        Some(Token::OpenRoundBracket) => parse_sexpr(parser),
        Some(Token::Number(text)) => Ok(Node::leaf(NodeKind::Number, text)),
        Some(Token::Symbol(text)) => Ok(Node::leaf(NodeKind::Symbol, text)),
        Some(Token::CloseRoundBracket) => Err(Error::UnmatchedCloseParen),
        None => Err(Error::UnclosedSexpr),
    }
}

fn parse_sexpr(parser: &mut Parser) -> Result<Node, Error> {
    // The bracket tokens stay in the tree as punctuation children; the
    // reader elides them.
    let mut children = vec![Node::leaf(NodeKind::Punct, "(")];
    loop {
        match parser.peek() {
            Some(Token::CloseRoundBracket) => {
                parser.next();
                children.push(Node::leaf(NodeKind::Punct, ")"));
                return Ok(Node::branch(NodeKind::Sexpr, children));
            }
            Some(_) => children.push(parse_expr(parser)?),
            None => return Err(Error::UnclosedSexpr),
        }
    }
}
