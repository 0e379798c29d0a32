//! Tokenizer for content function calls
//!
//! Produces identifiers, quoted literals (single or double quotes, with `\`
//! escaping the next character), numbers, and the punctuation `( ) , : ||`.
//! Every token carries the byte offset it starts at, for error reporting.

use proxima_core::{ProximaError, ProximaResult};
use std::iter::Peekable;
use std::str::CharIndices;

/// Kind and payload of a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Bare identifier
    Ident(String),
    /// Quoted literal, unescaped
    Str(String),
    /// Numeric literal, as written
    Number(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `||`
    OrOr,
}

impl TokenKind {
    /// Short description for error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Str(value) => format!("literal '{}'", value),
            TokenKind::Number(text) => format!("number {}", text),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::OrOr => "'||'".to_string(),
        }
    }
}

/// A token and where it starts
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was read
    pub kind: TokenKind,
    /// Byte offset of the first character
    pub offset: usize,
}

/// Split `input` into tokens
///
/// # Errors
///
/// Returns `Parse` for unterminated literals, a lone `|`, or characters that
/// cannot start a token.
pub fn tokenize(input: &str) -> ProximaResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        let kind = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '(' => single(&mut chars, TokenKind::LParen),
            ')' => single(&mut chars, TokenKind::RParen),
            ',' => single(&mut chars, TokenKind::Comma),
            ':' => single(&mut chars, TokenKind::Colon),
            '|' => {
                chars.next();
                match chars.next() {
                    Some((_, '|')) => TokenKind::OrOr,
                    _ => return Err(ProximaError::parse(offset, "expected '||'")),
                }
            }
            '\'' | '"' => TokenKind::Str(read_literal(&mut chars, offset)?),
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                TokenKind::Number(read_number(input, &mut chars, offset)?)
            }
            c if c.is_alphabetic() || c == '_' => TokenKind::Ident(read_ident(input, &mut chars, offset)),
            other => {
                return Err(ProximaError::parse(
                    offset,
                    format!("unexpected character '{}'", other),
                ))
            }
        };
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}

fn single(chars: &mut Peekable<CharIndices<'_>>, kind: TokenKind) -> TokenKind {
    chars.next();
    kind
}

fn read_literal(chars: &mut Peekable<CharIndices<'_>>, start: usize) -> ProximaResult<String> {
    let quote = match chars.next() {
        Some((_, q)) => q,
        None => return Err(ProximaError::parse(start, "expected literal")),
    };
    let mut value = String::new();
    loop {
        match chars.next() {
            Some((_, '\\')) => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => return Err(ProximaError::parse(start, "unterminated literal")),
            },
            Some((_, c)) if c == quote => return Ok(value),
            Some((_, c)) => value.push(c),
            None => return Err(ProximaError::parse(start, "unterminated literal")),
        }
    }
}

fn read_number(
    input: &str,
    chars: &mut Peekable<CharIndices<'_>>,
    start: usize,
) -> ProximaResult<String> {
    let mut end = start;
    let mut digits = 0;
    let mut seen_dot = false;
    let mut first = true;

    while let Some(&(offset, c)) = chars.peek() {
        let accept = match c {
            '-' | '+' => first,
            '.' => !seen_dot,
            c => c.is_ascii_digit(),
        };
        if !accept {
            break;
        }
        if c == '.' {
            seen_dot = true;
        } else if c.is_ascii_digit() {
            digits += 1;
        }
        first = false;
        end = offset + c.len_utf8();
        chars.next();
    }

    if digits == 0 {
        return Err(ProximaError::parse(start, "expected digits"));
    }
    Ok(input[start..end].to_string())
}

fn read_ident(input: &str, chars: &mut Peekable<CharIndices<'_>>, start: usize) -> String {
    let mut end = start;
    while let Some(&(offset, c)) = chars.peek() {
        if !(c.is_alphanumeric() || c == '_' || c == '.') {
            break;
        }
        end = offset + c.len_utf8();
        chars.next();
    }
    input[start..end].to_string()
}
