use thiserror::Error;

use crate::{
    ast::{Checker, Field, LogicOp, Term},
    normalize::normalize,
    scanner::{is_word_char, scan_number_value, scan_object_key, scan_string_value, scan_word},
};

/// Maximum nesting of logic expressions (objects, arrays, field types) and
/// brackets.
pub const MAX_PARSE_DEPTH: usize = 128;

/// Which side of a logic operator is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
}

impl std::fmt::Display for OperandSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandSide::Left => write!(f, "left-hand"),
            OperandSide::Right => write!(f, "right-hand"),
        }
    }
}

/// Errors raised while reading type text.
///
/// Variants that carry `rest` hold the unparsed input at the failure point;
/// the message shows its beginning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty type")]
    EmptyType,

    #[error("expected word, found {}", near(.rest))]
    ExpectedWord { rest: String },

    #[error("expected digits, found {}", near(.rest))]
    ExpectedDigits { rest: String },

    #[error("expected '{expected}', found {}", near(.found))]
    ExpectedToken { expected: char, found: String },

    #[error("unterminated string, missing closing {quote} in {}", near(.rest))]
    UnterminatedString { quote: char, rest: String },

    #[error("unterminated object type, missing '}}' for {}", near(.rest))]
    UnterminatedObject { rest: String },

    #[error("')' without matching '('")]
    UnmatchedCloseBracket,

    #[error("'(' without matching ')'")]
    UnmatchedOpenBracket,

    #[error("missing {side} operand for '{op}'")]
    MissingOperand { op: LogicOp, side: OperandSide },

    #[error("incomplete logic expression")]
    IncompleteLogicExpression,

    #[error("unexpected trailing input {}", near(.rest))]
    TrailingInput { rest: String },

    #[error("unrecognized character '{found}' at {}", near(.rest))]
    UnrecognizedLeadingChar { found: char, rest: String },

    #[error("invalid number literal '{literal}'")]
    InvalidNumber { literal: String },

    #[error("duplicate field '{name}' in object type")]
    DuplicateField { name: String },

    #[error("type is nested deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("type expands to more than {limit} alternatives")]
    TooLarge { limit: usize },
}

fn near(rest: &str) -> String {
    const SHOWN: usize = 24;
    if rest.is_empty() {
        return "end of input".to_string();
    }
    match rest.char_indices().nth(SHOWN) {
        Some((idx, _)) => format!("'{}...'", &rest[..idx]),
        None => format!("'{}'", rest),
    }
}

/// Recursive-descent parser over type text.
///
/// The parser consumes from the front of its input and keeps whatever it
/// did not understand in [`Parser::remaining`], so callers decide whether
/// leftover text is an error.
pub struct Parser<'a> {
    rest: &'a str,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            rest: input,
            depth: 0,
        }
    }

    /// Unconsumed input, without leading whitespace.
    pub fn remaining(&self) -> &'a str {
        self.rest.trim_start()
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn advance(&mut self, ch: char) {
        self.rest = &self.rest[ch.len_utf8()..];
    }

    fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance(ch);
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.eat(expected) {
            Ok(())
        } else {
            Err(ParseError::ExpectedToken {
                expected,
                found: self.rest.to_string(),
            })
        }
    }

    /// Parse a logic expression: leaf types joined by `&`, `|` and brackets.
    ///
    /// Stops at end of input, or when the next text belongs to an enclosing
    /// context (`}` `>` `,` `;`, or anything after a complete operand).
    pub fn parse_type(&mut self) -> Result<Checker, ParseError> {
        self.depth += 1;
        if self.depth > MAX_PARSE_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_PARSE_DEPTH,
            });
        }
        let checker = self.parse_logic()?;
        self.depth -= 1;
        Ok(checker)
    }

    fn parse_logic(&mut self) -> Result<Checker, ParseError> {
        let mut terms: Vec<Term> = Vec::new();
        let mut has_logic = false;
        // Brackets opened here and not yet closed
        let mut open = 0;

        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else { break };

            let term = match ch {
                '(' => {
                    open += 1;
                    self.depth += 1;
                    if self.depth > MAX_PARSE_DEPTH {
                        return Err(ParseError::TooDeep {
                            limit: MAX_PARSE_DEPTH,
                        });
                    }
                    Term::OpenBracket
                }
                ')' => {
                    if open > 0 {
                        open -= 1;
                        self.depth -= 1;
                    }
                    Term::CloseBracket
                }
                '&' => Term::Op(LogicOp::And),
                '|' => Term::Op(LogicOp::Or),
                _ => {
                    if let Some(last) = terms.last()
                        && (last.is_operand() || matches!(ch, '}' | '>' | ',' | ';'))
                    {
                        break;
                    }
                    let leaf = self.parse_one_type()?;
                    terms.push(Term::Checker(leaf));
                    continue;
                }
            };

            has_logic = true;
            self.advance(ch);
            terms.push(term);
        }

        self.depth -= open;

        if !has_logic {
            return match terms.pop() {
                Some(Term::Checker(checker)) => Ok(checker),
                _ => Err(ParseError::EmptyType),
            };
        }

        tracing::trace!(terms = terms.len(), "reducing logic expression");
        let terms = compile_bracket(terms)?;
        reduce_precedence(terms)
    }

    /// Parse one leaf type from the front of the input.
    pub fn parse_one_type(&mut self) -> Result<Checker, ParseError> {
        self.skip_whitespace();
        let Some(ch) = self.peek() else {
            return Err(ParseError::EmptyType);
        };

        match ch {
            '{' => self.parse_object_type(),
            '\'' | '"' => {
                let (value, rest) = scan_string_value(self.rest)?;
                self.rest = rest;
                Ok(Checker::StringLit(value))
            }
            c if c.is_ascii_digit() => {
                let (value, rest) = scan_number_value(self.rest)?;
                self.rest = rest;
                Ok(Checker::NumberLit(value))
            }
            c if is_word_char(c) => {
                let (word, rest) = scan_word(self.rest)?;
                if word == "Array" {
                    return self.parse_array_type();
                }
                self.rest = rest;
                Ok(keyword(word).unwrap_or_else(|| Checker::BareWordLit(word.to_string())))
            }
            found => Err(ParseError::UnrecognizedLeadingChar {
                found,
                rest: self.rest.to_string(),
            }),
        }
    }

    fn parse_object_type(&mut self) -> Result<Checker, ParseError> {
        let start = self.rest;
        self.expect('{')?;

        let unterminated = || ParseError::UnterminatedObject {
            rest: start.to_string(),
        };

        let mut fields: Vec<Field> = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(unterminated()),
                Some('}') => {
                    self.advance('}');
                    return Ok(Checker::Object(fields));
                }
                Some(_) => {}
            }

            let (name, rest) = scan_object_key(self.rest)?;
            self.rest = rest;
            self.skip_whitespace();

            let optional = self.eat('?');
            self.skip_whitespace();
            if self.rest.is_empty() {
                return Err(unterminated());
            }
            self.expect(':')?;

            let checker = self.parse_type()?;
            self.skip_whitespace();
            if !self.eat(',') {
                self.eat(';');
            }

            if fields.iter().any(|field| field.name == name) {
                return Err(ParseError::DuplicateField { name });
            }
            fields.push(Field::new(name, optional, checker));
        }
    }

    fn parse_array_type(&mut self) -> Result<Checker, ParseError> {
        let (word, rest) = scan_word(self.rest)?;
        if word != "Array" {
            return Err(ParseError::ExpectedWord {
                rest: self.rest.to_string(),
            });
        }
        self.rest = rest;

        self.expect('<')?;
        let element = self.parse_type()?;
        self.expect('>')?;

        Ok(Checker::array(element))
    }
}

fn keyword(word: &str) -> Option<Checker> {
    match word {
        "string" => Some(Checker::StringPrim),
        "number" => Some(Checker::NumberPrim),
        "boolean" => Some(Checker::BooleanPrim),
        "Date" => Some(Checker::DatePrim),
        "true" => Some(Checker::TrueLit),
        "false" => Some(Checker::FalseLit),
        "null" => Some(Checker::NullLit),
        _ => None,
    }
}

/// Replace every `( ... )` span with a single bracketed checker.
pub fn compile_bracket(terms: Vec<Term>) -> Result<Vec<Term>, ParseError> {
    let mut stack: Vec<Term> = Vec::with_capacity(terms.len());

    for term in terms {
        match term {
            Term::CloseBracket => {
                let open = stack
                    .iter()
                    .rposition(|t| matches!(t, Term::OpenBracket))
                    .ok_or(ParseError::UnmatchedCloseBracket)?;
                let span = stack.split_off(open + 1);
                stack.pop();
                let content = reduce_precedence(span)?;
                stack.push(Term::Checker(Checker::bracket(content)));
            }
            other => stack.push(other),
        }
    }

    if stack.iter().any(|t| matches!(t, Term::OpenBracket)) {
        return Err(ParseError::UnmatchedOpenBracket);
    }
    Ok(stack)
}

/// Reduce a bracket-free term list: every `&` first, then every `|`.
pub fn reduce_precedence(terms: Vec<Term>) -> Result<Checker, ParseError> {
    let terms = merge(terms, LogicOp::And)?;
    let mut terms = merge(terms, LogicOp::Or)?;

    match terms.pop() {
        Some(Term::Checker(checker)) if terms.is_empty() => Ok(checker),
        _ => Err(ParseError::IncompleteLogicExpression),
    }
}

fn merge(terms: Vec<Term>, op: LogicOp) -> Result<Vec<Term>, ParseError> {
    let mut merged: Vec<Term> = Vec::with_capacity(terms.len());
    let mut iter = terms.into_iter();

    while let Some(term) = iter.next() {
        match term {
            Term::Op(found) if found == op => {
                let left = match merged.pop() {
                    Some(Term::Checker(checker)) => checker,
                    _ => {
                        return Err(ParseError::MissingOperand {
                            op,
                            side: OperandSide::Left,
                        });
                    }
                };
                let right = match iter.next() {
                    Some(Term::Checker(checker)) => checker,
                    _ => {
                        return Err(ParseError::MissingOperand {
                            op,
                            side: OperandSide::Right,
                        });
                    }
                };
                merged.push(Term::Checker(op.combine(left, right)));
            }
            other => merged.push(other),
        }
    }
    Ok(merged)
}

/// Parse the longest leading type expression.
///
/// Returns the checker as written (not normalized) and the unparsed rest of
/// the input.
///
/// # Examples
///
/// ```
/// use shape_lang::{parse, Checker};
///
/// let (checker, rest) = parse("string | number trailing").unwrap();
/// assert_eq!(checker, Checker::or(Checker::StringPrim, Checker::NumberPrim));
/// assert_eq!(rest, "trailing");
/// ```
pub fn parse(text: &str) -> Result<(Checker, &str), ParseError> {
    let mut parser = Parser::new(text);
    let checker = parser.parse_type()?;
    Ok((checker, parser.remaining()))
}

/// Parse a complete type and normalize it.
///
/// Fails with [`ParseError::TrailingInput`] when anything but whitespace is
/// left after the expression.
///
/// # Examples
///
/// ```
/// use shape_lang::{compile_type, Checker, Field};
///
/// let checker = compile_type("{ a: number } & { b?: string }").unwrap();
/// assert_eq!(
///     checker,
///     Checker::Object(vec![
///         Field::new("a", false, Checker::NumberPrim),
///         Field::new("b", true, Checker::StringPrim),
///     ])
/// );
/// ```
pub fn compile_type(text: &str) -> Result<Checker, ParseError> {
    let (checker, rest) = parse(text)?;
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput {
            rest: rest.to_string(),
        });
    }
    tracing::debug!(raw = text, parsed = %checker, "parsed type");
    let normalized = normalize(&checker)?;
    tracing::debug!(compiled = %normalized, "normalized type");
    Ok(normalized)
}
