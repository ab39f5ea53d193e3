use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    ast::{Checker, Field, LogicOp},
    error::Error,
    parser::compile_type,
    value::Value,
};

/// Options that relax how values are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Accept `0`/`1` for `boolean`, `false` and `true`
    pub casual_boolean: bool,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_casual_boolean(mut self, casual_boolean: bool) -> Self {
        self.casual_boolean = casual_boolean;
        self
    }
}

/// Why a value does not match a type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The value has the wrong kind
    #[error("expected {expected}, got {found}")]
    TypeMismatch { expected: String, found: String },

    /// The value has the right kind but not the literal's value
    #[error("expected value {expected}, got {found}")]
    ValueMismatch { expected: String, found: String },

    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("unexpected extra field '{field}'")]
    ExtraField { field: String },

    #[error("in field '{field}': {source}")]
    InField {
        field: String,
        source: Box<ValidationError>,
    },

    #[error("at index {index}: {source}")]
    AtIndex {
        index: usize,
        source: Box<ValidationError>,
    },

    /// Every alternative of a union failed; the failures are kept in order.
    #[error("no branch of {expected} matched: {}", join_failures(.failures))]
    NoBranchMatched {
        expected: String,
        failures: Vec<ValidationError>,
    },
}

fn join_failures(failures: &[ValidationError]) -> String {
    failures
        .iter()
        .map(|failure| format!("({failure})"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Walks a checker tree against a value.
///
/// The evaluator holds only its options, so one compiled checker can be used
/// by any number of evaluators at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    options: CheckOptions,
}

impl Evaluator {
    pub fn new(options: CheckOptions) -> Self {
        Evaluator { options }
    }

    /// Check `value` against `checker`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_lang::{compile_type, CheckOptions, Evaluator, Value};
    ///
    /// let checker = compile_type("'y' | 'n'").unwrap();
    /// let evaluator = Evaluator::new(CheckOptions::default());
    ///
    /// assert!(evaluator.check(&checker, &Value::String("y".into())).is_ok());
    /// assert!(evaluator.check(&checker, &Value::String("maybe".into())).is_err());
    /// ```
    pub fn check(&self, checker: &Checker, value: &Value) -> Result<(), ValidationError> {
        match checker {
            Checker::StringPrim => {
                self.expect_kind(checker, value, matches!(value, Value::String(_)))
            }
            Checker::NumberPrim => self.expect_kind(
                checker,
                value,
                matches!(value, Value::Integer(_) | Value::Float(_)),
            ),
            Checker::DatePrim => {
                self.expect_kind(checker, value, matches!(value, Value::Date(_)))
            }
            Checker::BooleanPrim => {
                self.expect_kind(checker, value, self.as_boolean(value).is_some())
            }

            Checker::TrueLit => {
                self.expect_value(checker, value, self.as_boolean(value) == Some(true))
            }
            Checker::FalseLit => {
                self.expect_value(checker, value, self.as_boolean(value) == Some(false))
            }
            Checker::NullLit => self.expect_value(checker, value, matches!(value, Value::Null)),
            Checker::StringLit(expected) | Checker::BareWordLit(expected) => self.expect_value(
                checker,
                value,
                matches!(value, Value::String(s) if s == expected),
            ),
            Checker::NumberLit(expected) => {
                self.expect_value(checker, value, number_equals(*expected, value))
            }

            Checker::Object(fields) => self.check_object(checker, fields, value),
            Checker::Array(element) => self.check_array(checker, element, value),

            Checker::And(..) => checker
                .chain(LogicOp::And)
                .into_iter()
                .try_for_each(|operand| self.check(operand, value)),
            Checker::Or(..) => {
                let mut failures = Vec::new();
                for branch in checker.chain(LogicOp::Or) {
                    match self.check(branch, value) {
                        Ok(()) => return Ok(()),
                        Err(e) => failures.push(e),
                    }
                }
                Err(ValidationError::NoBranchMatched {
                    expected: checker.to_string(),
                    failures,
                })
            }
            Checker::Bracket(content) => self.check(content, value),
        }
    }

    fn check_object(
        &self,
        checker: &Checker,
        fields: &[Field],
        value: &Value,
    ) -> Result<(), ValidationError> {
        let Value::Object(obj) = value else {
            return Err(mismatch(checker, value));
        };

        for field in fields {
            match obj.get(&field.name) {
                Some(field_value) => {
                    self.check(&field.checker, field_value)
                        .map_err(|e| ValidationError::InField {
                            field: field.name.clone(),
                            source: Box::new(e),
                        })?
                }
                None if field.optional => {}
                None => {
                    return Err(ValidationError::MissingField {
                        field: field.name.clone(),
                    });
                }
            }
        }

        // Report the smallest undeclared key so the message is stable.
        let extra = obj
            .keys()
            .filter(|key| !fields.iter().any(|field| &field.name == *key))
            .min();
        match extra {
            Some(key) => Err(ValidationError::ExtraField { field: key.clone() }),
            None => Ok(()),
        }
    }

    fn check_array(
        &self,
        checker: &Checker,
        element: &Checker,
        value: &Value,
    ) -> Result<(), ValidationError> {
        let Value::Array(items) = value else {
            return Err(mismatch(checker, value));
        };

        for (index, item) in items.iter().enumerate() {
            self.check(element, item)
                .map_err(|e| ValidationError::AtIndex {
                    index,
                    source: Box::new(e),
                })?;
        }
        Ok(())
    }

    /// Booleans, plus `0`/`1` when casual booleans are enabled.
    fn as_boolean(&self, value: &Value) -> Option<bool> {
        match value {
            Value::Boolean(b) => Some(*b),
            Value::Integer(_) | Value::Float(_) if self.options.casual_boolean => {
                match value.as_float() {
                    Some(n) if n == 0.0 => Some(false),
                    Some(n) if n == 1.0 => Some(true),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn expect_kind(
        &self,
        checker: &Checker,
        value: &Value,
        ok: bool,
    ) -> Result<(), ValidationError> {
        if ok {
            Ok(())
        } else {
            Err(mismatch(checker, value))
        }
    }

    fn expect_value(
        &self,
        checker: &Checker,
        value: &Value,
        ok: bool,
    ) -> Result<(), ValidationError> {
        if ok {
            Ok(())
        } else {
            Err(ValidationError::ValueMismatch {
                expected: checker.to_string(),
                found: value.describe(),
            })
        }
    }
}

fn mismatch(checker: &Checker, value: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        expected: checker.to_string(),
        found: value.type_name().to_string(),
    }
}

/// Integers compare exactly; floats compare against the literal's `f64`.
fn number_equals(expected: Decimal, value: &Value) -> bool {
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

    match value {
        Value::Integer(n) => Decimal::from_i128(*n) == Some(expected),
        Value::Float(n) => expected.to_f64() == Some(*n),
        _ => false,
    }
}

/// Check `value` against a compiled checker.
pub fn check(
    checker: &Checker,
    value: &Value,
    options: &CheckOptions,
) -> Result<(), ValidationError> {
    Evaluator::new(*options).check(checker, value)
}

/// Compile `type_text` and check `value` against it.
///
/// Compiling is the expensive half; callers that check many values against
/// one type should compile once (or use [`crate::TypeCache`]).
///
/// # Examples
///
/// ```
/// use shape_lang::{check_type, CheckOptions, Value};
///
/// let options = CheckOptions::default().with_casual_boolean(true);
/// assert!(check_type("true", &Value::Integer(1), &options).is_ok());
/// assert!(check_type("true", &Value::Integer(1), &CheckOptions::default()).is_err());
/// ```
pub fn check_type(type_text: &str, value: &Value, options: &CheckOptions) -> Result<(), Error> {
    let checker = compile_type(type_text)?;
    check(&checker, value, options)?;
    Ok(())
}
