// tests/scanner_tests.rs

use rust_decimal::Decimal;
use shape_lang::parser::ParseError;
use shape_lang::scanner::{
    scan_integer_digits, scan_number_value, scan_object_key, scan_string_value, scan_word,
};
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Words
// ============================================================================

#[test]
fn test_word_letters_and_underscore() {
    let (word, rest) = scan_word("_user_id: string").unwrap();
    assert_eq!(word, "_user_id");
    assert_eq!(rest, ": string");
}

#[test]
fn test_word_whole_input() {
    assert_eq!(scan_word("Array").unwrap(), ("Array", ""));
}

#[test]
fn test_word_rejects_digit_start() {
    assert!(matches!(
        scan_word("1abc"),
        Err(ParseError::ExpectedWord { rest }) if rest == "1abc"
    ));
}

#[test]
fn test_word_rejects_empty() {
    assert!(matches!(scan_word(""), Err(ParseError::ExpectedWord { .. })));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_single_quoted_string() {
    let (value, rest) = scan_string_value("'yes' | 'no'").unwrap();
    assert_eq!(value, "yes");
    assert_eq!(rest, " | 'no'");
}

#[test]
fn test_double_quoted_string_keeps_other_quote() {
    let (value, rest) = scan_string_value(r#""it's""#).unwrap();
    assert_eq!(value, "it's");
    assert_eq!(rest, "");
}

#[test]
fn test_backslash_copies_next_char_verbatim() {
    // No escape codes: \n is just 'n'
    let (value, _) = scan_string_value(r#"'a\nb\\c\'d'"#).unwrap();
    assert_eq!(value, r"anb\c'd");
}

#[test]
fn test_empty_string_literal() {
    assert_eq!(scan_string_value("''").unwrap(), (String::new(), ""));
}

#[test]
fn test_unicode_string() {
    let (value, rest) = scan_string_value("'héllo ✓'}").unwrap();
    assert_eq!(value, "héllo ✓");
    assert_eq!(rest, "}");
}

#[test]
fn test_unterminated_string() {
    assert!(matches!(
        scan_string_value("'abc"),
        Err(ParseError::UnterminatedString { quote: '\'', .. })
    ));
}

#[test]
fn test_unterminated_after_trailing_backslash() {
    assert!(matches!(
        scan_string_value(r#""abc\"#),
        Err(ParseError::UnterminatedString { quote: '"', .. })
    ));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_integer_digits() {
    assert_eq!(scan_integer_digits("123abc").unwrap(), ("123", "abc"));
}

#[test]
fn test_integer_digits_required() {
    assert!(matches!(
        scan_integer_digits("abc"),
        Err(ParseError::ExpectedDigits { .. })
    ));
}

#[test]
fn test_integer_number() {
    let (value, rest) = scan_number_value("42 | 7").unwrap();
    assert_eq!(value, dec("42"));
    assert_eq!(rest, " | 7");
}

#[test]
fn test_decimal_number() {
    let (value, rest) = scan_number_value("3.25}").unwrap();
    assert_eq!(value, dec("3.25"));
    assert_eq!(rest, "}");
}

#[test]
fn test_dot_without_digits_is_left_alone() {
    let (value, rest) = scan_number_value("1.x").unwrap();
    assert_eq!(value, dec("1"));
    assert_eq!(rest, ".x");
}

#[test]
fn test_only_one_decimal_point() {
    let (value, rest) = scan_number_value("1.2.3").unwrap();
    assert_eq!(value, dec("1.2"));
    assert_eq!(rest, ".3");
}

#[test]
fn test_no_exponent() {
    let (value, rest) = scan_number_value("1e5").unwrap();
    assert_eq!(value, dec("1"));
    assert_eq!(rest, "e5");
}

#[test]
fn test_number_overflow() {
    assert!(matches!(
        scan_number_value("99999999999999999999999999999999999"),
        Err(ParseError::InvalidNumber { .. })
    ));
}

#[test]
fn test_long_fraction_is_rejected_not_rounded() {
    let literal = "0.000000000000000000000000000001";
    assert_eq!(
        scan_number_value(literal),
        Err(ParseError::InvalidNumber {
            literal: literal.to_string()
        })
    );
}

#[test]
fn test_fraction_at_full_precision() {
    let (value, rest) = scan_number_value("0.1234567890123456789012345678").unwrap();
    assert_eq!(value, dec("0.1234567890123456789012345678"));
    assert_eq!(rest, "");
}

// ============================================================================
// Object keys
// ============================================================================

#[test]
fn test_bare_key_allows_digits() {
    let (key, rest) = scan_object_key("field2?: number").unwrap();
    assert_eq!(key, "field2");
    assert_eq!(rest, "?: number");
}

#[test]
fn test_quoted_key() {
    let (key, rest) = scan_object_key(r#""content-type": string"#).unwrap();
    assert_eq!(key, "content-type");
    assert_eq!(rest, ": string");
}

#[test]
fn test_bad_key() {
    assert!(matches!(
        scan_object_key("-x: string"),
        Err(ParseError::ExpectedWord { .. })
    ));
}
