use regex::Regex;
use std::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum Token<'a> {
    OpenRoundBracket,
    CloseRoundBracket,
    Number(&'a str),
    Symbol(&'a str),
}

#[derive(Debug, Eq, PartialEq)]
pub enum TokenizerError {
    NoFirstCharacter,
    UnknownToken(String),
    NoCapture(String),
}

impl fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerError::NoFirstCharacter => write!(f, "no characters to parse token from"),
            TokenizerError::UnknownToken(t) => write!(f, "unknown token '{}'", t),
            TokenizerError::NoCapture(_) => write!(f, "token regex did not capture a token"),
        }
    }
}

fn create_token(captured: &str) -> Result<Token, TokenizerError> {
    let bytes = captured.as_bytes();
    let first_char = bytes.first().ok_or(TokenizerError::NoFirstCharacter)?;
    match first_char {
        b'(' => Ok(Token::OpenRoundBracket),
        b')' => Ok(Token::CloseRoundBracket),
        b'0'..=b'9' => Ok(Token::Number(captured)),
        // A lone minus is the subtraction operator; with digits after it,
        // a negative literal.
        b'-' if bytes.len() > 1 => Ok(Token::Number(captured)),
        b'+' | b'-' | b'*' | b'/' if bytes.len() == 1 => Ok(Token::Symbol(captured)),
        _ => Err(TokenizerError::UnknownToken(String::from(captured))),
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
    lazy_static! {
        static ref TOKEN_RE: Regex = Regex::new(
            r"(?x)               # ignore whitespace in this pattern & allow comments
                \s*              # leading whitespace, ignored
                (                # token capture group
                    [()]         # round brackets
                    |-?[0-9]+    # integer literal, optionally negative
                    |[^\s()]+    # one or more plain characters
                )
                \s*              # trailing whitespace, ignored
            "
        )
        .unwrap();
    }
    let mut input = input.trim();
    let mut tokens = Vec::new();
    while !input.is_empty() {
        let caps = TOKEN_RE
            .captures(input)
            .ok_or_else(|| TokenizerError::NoCapture(String::from(input)))?;
        let token = create_token(caps.get(1).unwrap().as_str())?;
        tokens.push(token);
        input = &input[caps.get(0).unwrap().end()..];
    }
    Ok(tokens)
}
