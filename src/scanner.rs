//! Primitive scanners for type text.
//!
//! Every scanner takes the remaining input and returns the scanned value
//! together with the unconsumed suffix. Whitespace is not skipped here; the
//! parser trims between tokens.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::parser::ParseError;

/// Result of a scan: the value and the text left after it.
pub type Scanned<'a, T> = Result<(T, &'a str), ParseError>;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]+").expect("word pattern is valid"));

static BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+").expect("key pattern is valid"));

/// Letters and underscore. Digits are not word characters.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Characters allowed in an unquoted object key.
pub fn is_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Longest prefix of ASCII letters and underscores.
pub fn scan_word(input: &str) -> Scanned<'_, &str> {
    match WORD.find(input) {
        Some(m) => Ok((m.as_str(), &input[m.end()..])),
        None => Err(ParseError::ExpectedWord {
            rest: input.to_string(),
        }),
    }
}

/// A `'` or `"` quoted string. A backslash copies the next character as is.
pub fn scan_string_value(input: &str) -> Scanned<'_, String> {
    let mut chars = input.char_indices();
    let quote = match chars.next() {
        Some((_, quote @ ('\'' | '"'))) => quote,
        _ => {
            return Err(ParseError::ExpectedToken {
                expected: '\'',
                found: input.to_string(),
            });
        }
    };

    let mut value = String::new();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => break,
            },
            c if c == quote => return Ok((value, &input[idx + c.len_utf8()..])),
            c => value.push(c),
        }
    }

    Err(ParseError::UnterminatedString {
        quote,
        rest: input.to_string(),
    })
}

/// Longest run of ASCII digits, at least one.
pub fn scan_integer_digits(input: &str) -> Scanned<'_, &str> {
    let len = input.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return Err(ParseError::ExpectedDigits {
            rest: input.to_string(),
        });
    }
    Ok((&input[..len], &input[len..]))
}

/// Unsigned integer or decimal literal such as `42` or `3.25`.
///
/// The `.` is only taken when a digit follows it. Signs and exponents are not
/// part of the language. Literals that would need rounding to fit a
/// [`Decimal`] are rejected rather than changed.
pub fn scan_number_value(input: &str) -> Scanned<'_, Decimal> {
    let (whole, rest) = scan_integer_digits(input)?;

    let (literal, rest) = match rest.strip_prefix('.') {
        Some(after_dot) if after_dot.starts_with(|c: char| c.is_ascii_digit()) => {
            let (fraction, rest) = scan_integer_digits(after_dot)?;
            (&input[..whole.len() + 1 + fraction.len()], rest)
        }
        _ => (whole, rest),
    };

    let value = Decimal::from_str_exact(literal).map_err(|_| ParseError::InvalidNumber {
        literal: literal.to_string(),
    })?;
    Ok((value, rest))
}

/// Object key: quoted string or bare `\w+`.
pub fn scan_object_key(input: &str) -> Scanned<'_, String> {
    if input.starts_with(['\'', '"']) {
        return scan_string_value(input);
    }
    match BARE_KEY.find(input) {
        Some(m) => Ok((m.as_str().to_string(), &input[m.end()..])),
        None => Err(ParseError::ExpectedWord {
            rest: input.to_string(),
        }),
    }
}

#[test]
fn test_scan_word_stops_at_digit() {
    let (word, rest) = scan_word("string1 | x").unwrap();
    assert_eq!(word, "string");
    assert_eq!(rest, "1 | x");
}

#[test]
fn test_scan_string_escape() {
    let (value, rest) = scan_string_value(r#"'it\'s' & x"#).unwrap();
    assert_eq!(value, "it's");
    assert_eq!(rest, " & x");
}
