//! Content function call syntax
//!
//! Parses and renders the call forms the evaluator is invoked through:
//!
//! ```text
//! [content:]within(<distance> [, <zone>], termOffsetMap, 'term', 'term', ...)
//! [content:]adjacent([<zone>,] termOffsetMap, 'term', ...)
//! [content:]phrase([<zone>,] termOffsetMap, 'term', ...)
//! [content:]scoredPhrase([<zone>,] <threshold>, termOffsetMap, 'term', ...)
//! ```
//!
//! Arguments before the term offset map variable are leading arguments, in
//! any order: a zone (quoted, bare, or a `(A || B)` group) and the numeric
//! distance or threshold. Arguments after it are the terms, which must be
//! quoted.
//!
//! # Example
//!
//! ```
//! use proxima_engine::ContentFunction;
//!
//! let f: ContentFunction = "content:within('BODY', 5, termOffsetMap, 'hello', 'world')"
//!     .parse()
//!     .unwrap();
//! assert_eq!(f.distance(), Some(5));
//! assert_eq!(f.terms(), ["hello", "world"]);
//! assert_eq!(f.to_string(), "content:within('BODY', 5, termOffsetMap, 'hello', 'world')");
//! ```

pub mod lexer;

use crate::evaluator::{ProximityEvaluator, ProximityOutcome};
use crate::mode::{Mode, ProximityRequest};
use lexer::{tokenize, Token, TokenKind};
use proxima_core::{
    ProximaConfig, ProximaError, ProximaResult, ZoneFilter, DEFAULT_TERM_OFFSET_MAP_VARIABLE,
};
use proxima_postings::TermOffsetMap;
use std::fmt;
use std::str::FromStr;

/// Namespace prefix of content functions
pub const CONTENT_NAMESPACE: &str = "content";

// ============================================================================
// ContentFunction
// ============================================================================

/// A parsed content function call
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFunction {
    request: ProximityRequest,
    variable: String,
}

impl ContentFunction {
    /// Wrap a request, rendering it with the default variable name
    pub fn from_request(request: ProximityRequest) -> ProximaResult<Self> {
        request.validate()?;
        Ok(ContentFunction {
            request,
            variable: DEFAULT_TERM_OFFSET_MAP_VARIABLE.to_string(),
        })
    }

    /// Parse a call using the default variable name `termOffsetMap`
    pub fn parse(text: &str) -> ProximaResult<Self> {
        Self::parse_with_variable(text, DEFAULT_TERM_OFFSET_MAP_VARIABLE)
    }

    /// Parse a call using the variable name from `config`
    pub fn parse_with_config(text: &str, config: &ProximaConfig) -> ProximaResult<Self> {
        Self::parse_with_variable(text, &config.term_offset_map_variable)
    }

    /// Parse a call whose leading arguments end at `variable`
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed text and `InvalidArgument` for calls
    /// that are well formed but name an unknown function, lack the
    /// variable, or carry bad arguments.
    pub fn parse_with_variable(text: &str, variable: &str) -> ProximaResult<Self> {
        let tokens = tokenize(text)?;
        let call = Parser::new(&tokens, text.len()).parse_call()?;
        let function = call.into_function(variable)?;
        tracing::debug!(
            target: "proxima::function",
            function = %function,
            "Parsed content function"
        );
        Ok(function)
    }

    /// Evaluation mode
    pub fn mode(&self) -> Mode {
        self.request.mode
    }

    /// Function name as written in calls
    pub fn name(&self) -> &'static str {
        self.request.mode.name()
    }

    /// Zones the call is restricted to
    pub fn zones(&self) -> &ZoneFilter {
        &self.request.zones
    }

    /// Distance, for `within`
    pub fn distance(&self) -> Option<u32> {
        self.request.mode.distance()
    }

    /// Threshold, for `scoredPhrase`
    pub fn threshold(&self) -> Option<f32> {
        self.request.mode.threshold()
    }

    /// Terms in call order
    pub fn terms(&self) -> &[String] {
        &self.request.terms
    }

    /// Name of the term offset map variable
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The evaluator request this call stands for
    pub fn request(&self) -> &ProximityRequest {
        &self.request
    }

    /// Consume the call, returning its request
    pub fn into_request(self) -> ProximityRequest {
        self.request
    }

    /// Evaluate against `map` with the default configuration
    pub fn evaluate(&self, map: &mut TermOffsetMap) -> ProximaResult<ProximityOutcome> {
        self.evaluate_with(&ProximityEvaluator::default(), map)
    }

    /// Evaluate against `map` with `evaluator`
    pub fn evaluate_with(
        &self,
        evaluator: &ProximityEvaluator,
        map: &mut TermOffsetMap,
    ) -> ProximaResult<ProximityOutcome> {
        evaluator.evaluate(&self.request, map)
    }
}

impl FromStr for ContentFunction {
    type Err = ProximaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ContentFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}(", CONTENT_NAMESPACE, self.name())?;
        match &self.request.zones {
            ZoneFilter::All => {}
            ZoneFilter::Named(name) => write!(f, "{}, ", Quoted(name))?,
            ZoneFilter::AnyOf(names) => {
                f.write_str("(")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" || ")?;
                    }
                    write!(f, "{}", Quoted(name))?;
                }
                f.write_str("), ")?;
            }
        }
        match self.request.mode {
            Mode::Within { distance } => write!(f, "{}, ", distance)?,
            Mode::ScoredPhrase { threshold } => write!(f, "{}, ", threshold)?,
            Mode::Adjacent | Mode::Phrase => {}
        }
        f.write_str(&self.variable)?;
        for term in &self.request.terms {
            write!(f, ", {}", Quoted(term))?;
        }
        f.write_str(")")
    }
}

/// Single-quoted literal with `\` and `'` escaped
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for c in self.0.chars() {
            if c == '\'' || c == '\\' {
                f.write_str("\\")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str("'")
    }
}

// ============================================================================
// Parser
// ============================================================================

#[derive(Debug)]
enum Arg {
    Ident { name: String, offset: usize },
    Str { value: String, offset: usize },
    Number { text: String, offset: usize },
    Group { names: Vec<String>, offset: usize },
}

impl Arg {
    fn offset(&self) -> usize {
        match self {
            Arg::Ident { offset, .. }
            | Arg::Str { offset, .. }
            | Arg::Number { offset, .. }
            | Arg::Group { offset, .. } => *offset,
        }
    }
}

#[derive(Debug)]
struct Call {
    name: String,
    name_offset: usize,
    args: Vec<Arg>,
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    end: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], end: usize) -> Self {
        Parser { tokens, pos: 0, end }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn here(&self) -> usize {
        self.peek().map_or(self.end, |t| t.offset)
    }

    fn expect(&mut self, kind: TokenKind) -> ProximaResult<()> {
        match self.advance() {
            Some(token) if token.kind == kind => Ok(()),
            Some(token) => Err(ProximaError::parse(
                token.offset,
                format!("expected {}, found {}", kind.describe(), token.kind.describe()),
            )),
            None => Err(ProximaError::parse(
                self.end,
                format!("expected {}, found end of input", kind.describe()),
            )),
        }
    }

    fn parse_call(mut self) -> ProximaResult<Call> {
        let (mut name, mut name_offset) = self.ident()?;
        if let Some(Token {
            kind: TokenKind::Colon,
            ..
        }) = self.peek()
        {
            if name != CONTENT_NAMESPACE {
                return Err(ProximaError::invalid_argument(
                    "namespace",
                    format!("unknown namespace '{}'", name),
                ));
            }
            self.advance();
            let (n, o) = self.ident()?;
            name = n;
            name_offset = o;
        }

        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if let Some(Token {
            kind: TokenKind::RParen,
            ..
        }) = self.peek()
        {
            self.advance();
        } else {
            loop {
                args.push(self.arg()?);
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::Comma,
                        ..
                    }) => continue,
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => break,
                    Some(token) => {
                        return Err(ProximaError::parse(
                            token.offset,
                            format!("expected ',' or ')', found {}", token.kind.describe()),
                        ))
                    }
                    None => {
                        return Err(ProximaError::parse(
                            self.end,
                            "expected ')', found end of input",
                        ))
                    }
                }
            }
        }

        if let Some(token) = self.peek() {
            return Err(ProximaError::parse(
                token.offset,
                format!("unexpected {} after call", token.kind.describe()),
            ));
        }

        Ok(Call {
            name,
            name_offset,
            args,
        })
    }

    fn ident(&mut self) -> ProximaResult<(String, usize)> {
        match self.advance() {
            Some(Token {
                kind: TokenKind::Ident(name),
                offset,
            }) => Ok((name.clone(), *offset)),
            Some(token) => Err(ProximaError::parse(
                token.offset,
                format!("expected function name, found {}", token.kind.describe()),
            )),
            None => Err(ProximaError::parse(self.end, "expected function name")),
        }
    }

    fn arg(&mut self) -> ProximaResult<Arg> {
        let offset = self.here();
        match self.advance() {
            Some(Token {
                kind: TokenKind::Ident(name),
                ..
            }) => Ok(Arg::Ident {
                name: name.clone(),
                offset,
            }),
            Some(Token {
                kind: TokenKind::Str(value),
                ..
            }) => Ok(Arg::Str {
                value: value.clone(),
                offset,
            }),
            Some(Token {
                kind: TokenKind::Number(text),
                ..
            }) => Ok(Arg::Number {
                text: text.clone(),
                offset,
            }),
            Some(Token {
                kind: TokenKind::LParen,
                ..
            }) => self.group(offset),
            Some(token) => Err(ProximaError::parse(
                token.offset,
                format!("expected argument, found {}", token.kind.describe()),
            )),
            None => Err(ProximaError::parse(self.end, "expected argument")),
        }
    }

    /// `(A || B || ...)`, opening parenthesis already consumed
    fn group(&mut self, offset: usize) -> ProximaResult<Arg> {
        let mut names = Vec::new();
        loop {
            match self.advance() {
                Some(Token {
                    kind: TokenKind::Ident(name) | TokenKind::Str(name),
                    ..
                }) => names.push(name.clone()),
                Some(token) => {
                    return Err(ProximaError::parse(
                        token.offset,
                        format!("expected zone name, found {}", token.kind.describe()),
                    ))
                }
                None => return Err(ProximaError::parse(self.end, "expected zone name")),
            }
            match self.advance() {
                Some(Token {
                    kind: TokenKind::OrOr,
                    ..
                }) => continue,
                Some(Token {
                    kind: TokenKind::RParen,
                    ..
                }) => return Ok(Arg::Group { names, offset }),
                Some(token) => {
                    return Err(ProximaError::parse(
                        token.offset,
                        format!("expected '||' or ')', found {}", token.kind.describe()),
                    ))
                }
                None => return Err(ProximaError::parse(self.end, "expected ')'")),
            }
        }
    }
}

// ============================================================================
// Argument resolution
// ============================================================================

#[derive(Clone, Copy)]
enum Kind {
    Within,
    Adjacent,
    Phrase,
    ScoredPhrase,
}

impl Call {
    fn into_function(self, variable: &str) -> ProximaResult<ContentFunction> {
        let kind = match self.name.as_str() {
            "within" => Kind::Within,
            "adjacent" => Kind::Adjacent,
            "phrase" => Kind::Phrase,
            "scoredPhrase" => Kind::ScoredPhrase,
            other => {
                return Err(ProximaError::invalid_argument(
                    "function",
                    format!("unknown content function '{}' at byte {}", other, self.name_offset),
                ))
            }
        };

        let split = self
            .args
            .iter()
            .position(|arg| matches!(arg, Arg::Ident { name, .. } if name == variable));
        let Some(split) = split else {
            let quoted = self
                .args
                .iter()
                .any(|arg| matches!(arg, Arg::Str { value, .. } if value == variable));
            let reason = if quoted {
                "term offset map variable must not be quoted".to_string()
            } else {
                format!("missing term offset map variable '{}'", variable)
            };
            return Err(ProximaError::invalid_argument(variable, reason));
        };

        let mut args = self.args;
        let term_args = args.split_off(split + 1);
        args.truncate(split);

        let mut zones: Option<ZoneFilter> = None;
        let mut number: Option<(String, usize)> = None;
        for arg in args {
            let offset = arg.offset();
            match arg {
                Arg::Number { text, .. } => {
                    if number.is_some() {
                        return Err(ProximaError::invalid_argument(
                            "arguments",
                            format!("unexpected extra number {} at byte {}", text, offset),
                        ));
                    }
                    number = Some((text, offset));
                }
                Arg::Ident { name, .. } | Arg::Str { value: name, .. } => {
                    set_zones(&mut zones, ZoneFilter::named(name), offset)?;
                }
                Arg::Group { names, .. } => {
                    set_zones(&mut zones, ZoneFilter::from_names(names)?, offset)?;
                }
            }
        }

        let mode = match kind {
            Kind::Within => {
                let (text, offset) = number.ok_or_else(|| {
                    ProximaError::invalid_argument("distance", "within requires a distance")
                })?;
                let distance = text.parse::<u32>().map_err(|_| {
                    ProximaError::invalid_argument(
                        "distance",
                        format!("'{}' at byte {} is not a positive integer", text, offset),
                    )
                })?;
                Mode::Within { distance }
            }
            Kind::ScoredPhrase => {
                let (text, offset) = number.ok_or_else(|| {
                    ProximaError::invalid_argument(
                        "threshold",
                        "scoredPhrase requires a threshold",
                    )
                })?;
                let threshold = text.parse::<f32>().map_err(|_| {
                    ProximaError::invalid_argument(
                        "threshold",
                        format!("'{}' at byte {} is not a number", text, offset),
                    )
                })?;
                Mode::ScoredPhrase { threshold }
            }
            Kind::Adjacent | Kind::Phrase => {
                if let Some((text, offset)) = number {
                    return Err(ProximaError::invalid_argument(
                        "arguments",
                        format!("unexpected number {} at byte {}", text, offset),
                    ));
                }
                if matches!(kind, Kind::Adjacent) {
                    Mode::Adjacent
                } else {
                    Mode::Phrase
                }
            }
        };

        let mut terms = Vec::with_capacity(term_args.len());
        for arg in term_args {
            match arg {
                Arg::Str { value, .. } => terms.push(value),
                other => {
                    return Err(ProximaError::invalid_argument(
                        "terms",
                        format!("term at byte {} must be a quoted literal", other.offset()),
                    ))
                }
            }
        }

        let request = ProximityRequest {
            mode,
            zones: zones.unwrap_or_default(),
            terms,
        };
        request.validate()?;

        Ok(ContentFunction {
            request,
            variable: variable.to_string(),
        })
    }
}

fn set_zones(slot: &mut Option<ZoneFilter>, zones: ZoneFilter, offset: usize) -> ProximaResult<()> {
    if slot.is_some() {
        return Err(ProximaError::invalid_argument(
            "zone",
            format!("unexpected second zone argument at byte {}", offset),
        ));
    }
    zones.validate()?;
    *slot = Some(zones);
    Ok(())
}
