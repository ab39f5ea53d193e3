use std::fmt;

use crate::ast::Checker;

/// Logic operators, in the order they are reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    /// Intersection (`&`), binds tighter
    And,
    /// Union (`|`)
    Or,
}

impl LogicOp {
    pub fn symbol(self) -> char {
        match self {
            LogicOp::And => '&',
            LogicOp::Or => '|',
        }
    }

    /// Build the checker node for `left <op> right`.
    pub fn combine(self, left: Checker, right: Checker) -> Checker {
        match self {
            LogicOp::And => Checker::and(left, right),
            LogicOp::Or => Checker::or(left, right),
        }
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One element of a flat logic expression before brackets and precedence
/// are resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A parsed leaf type, or an already reduced group
    Checker(Checker),
    /// `&` or `|`
    Op(LogicOp),
    /// `(`
    OpenBracket,
    /// `)`
    CloseBracket,
}

impl Term {
    /// Whether an operator may follow this term.
    pub fn is_operand(&self) -> bool {
        matches!(self, Term::Checker(_) | Term::CloseBracket)
    }
}
