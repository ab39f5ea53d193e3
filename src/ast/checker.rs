use std::fmt;

use rust_decimal::Decimal;

use crate::{ast::LogicOp, output::TypePrinter};

/// A compiled type expression.
///
/// The tree is immutable once built. [`crate::compile_type`] returns it
/// already normalized, so it can be shared across threads and checked
/// without re-deriving any algebra.
#[derive(Debug, Clone, PartialEq)]
pub enum Checker {
    // Primitives
    /// `string`
    StringPrim,
    /// `number` (integers and floats)
    NumberPrim,
    /// `boolean`
    BooleanPrim,
    /// `Date`
    DatePrim,

    // Singletons
    /// `true`
    TrueLit,
    /// `false`
    FalseLit,
    /// `null`
    NullLit,

    // Literals
    /// Quoted string literal
    ///
    /// # Examples
    /// ```text
    /// 'yes'
    /// "it\"s"
    /// ```
    StringLit(String),

    /// Unsigned numeric literal with an optional fraction
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 0.5
    /// ```
    NumberLit(Decimal),

    /// Identifier that is not a keyword.
    ///
    /// Matches the string spelled the same way, so `active` and `'active'`
    /// accept the same values.
    BareWordLit(String),

    // Composites
    /// Closed object shape. Field names are unique.
    Object(Vec<Field>),

    /// `Array<T>`
    Array(Box<Checker>),

    // Logic
    /// `left & right`
    And(Box<Checker>, Box<Checker>),

    /// `left | right`
    Or(Box<Checker>, Box<Checker>),

    /// `( content )`, transparent when checking
    Bracket(Box<Checker>),
}

/// A declared object field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Optional fields may be absent from the value
    pub optional: bool,
    pub checker: Checker,
}

impl Field {
    pub fn new(name: impl Into<String>, optional: bool, checker: Checker) -> Self {
        Field {
            name: name.into(),
            optional,
            checker,
        }
    }
}

impl Checker {
    pub fn and(left: Checker, right: Checker) -> Self {
        Checker::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Checker, right: Checker) -> Self {
        Checker::Or(Box::new(left), Box::new(right))
    }

    pub fn bracket(content: Checker) -> Self {
        Checker::Bracket(Box::new(content))
    }

    pub fn array(element: Checker) -> Self {
        Checker::Array(Box::new(element))
    }

    /// Look through any number of grouping brackets.
    pub fn unbracketed(&self) -> &Checker {
        let mut current = self;
        while let Checker::Bracket(content) = current {
            current = content;
        }
        current
    }

    /// The fields of an object shape, seen through brackets.
    pub fn as_object(&self) -> Option<&[Field]> {
        match self.unbracketed() {
            Checker::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// The two branches of a union, seen through brackets.
    pub fn as_or(&self) -> Option<(&Checker, &Checker)> {
        match self.unbracketed() {
            Checker::Or(left, right) => Some((left, right)),
            _ => None,
        }
    }

    /// The operands of a chain of `op`, left to right.
    ///
    /// `a | b | c` parses as a left-deep tree; this walks it without
    /// recursion so wide unions cost no stack. Brackets end the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_lang::{Checker, LogicOp};
    ///
    /// let union = Checker::or(
    ///     Checker::or(Checker::StringPrim, Checker::NumberPrim),
    ///     Checker::NullLit,
    /// );
    /// assert_eq!(
    ///     union.chain(LogicOp::Or),
    ///     [&Checker::StringPrim, &Checker::NumberPrim, &Checker::NullLit]
    /// );
    /// assert_eq!(Checker::StringPrim.chain(LogicOp::And), [&Checker::StringPrim]);
    /// ```
    pub fn chain(&self, op: LogicOp) -> Vec<&Checker> {
        let mut operands = Vec::new();
        let mut pending = vec![self];

        while let Some(current) = pending.pop() {
            match (op, current) {
                (LogicOp::Or, Checker::Or(left, right))
                | (LogicOp::And, Checker::And(left, right)) => {
                    pending.push(right.as_ref());
                    pending.push(left.as_ref());
                }
                _ => operands.push(current),
            }
        }
        operands
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TypePrinter::new(false).print(self))
    }
}
