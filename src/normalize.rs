//! Normalization algebra for checker trees.
//!
//! Two rewrites make intersections check correctly against closed objects:
//!
//! - `&` distributes over `|`: `(a | b) & c` becomes `(a & c) | (b & c)`,
//!   on either side and through brackets.
//! - `&` of two object shapes becomes one object whose shared fields are the
//!   intersection of both field types.
//!
//! Anything else stays a plain `And`, which checks both operands.
//!
//! Chains such as `a | b | c` are walked as flat lists, so only objects,
//! arrays, brackets and merged fields count toward [`MAX_NORMALIZE_DEPTH`].
//! Distribution multiplies alternatives; the total produced by one
//! normalization is capped at [`MAX_ALTERNATIVES`].

use crate::{
    ast::{Checker, Field, LogicOp},
    parser::ParseError,
};

/// Nesting limit for objects, arrays and brackets during normalization.
pub const MAX_NORMALIZE_DEPTH: usize = 256;

/// Most union alternatives one normalization may produce by distribution.
pub const MAX_ALTERNATIVES: usize = 4096;

/// Return the normalized form of `checker`. The input is left untouched.
pub fn normalize(checker: &Checker) -> Result<Checker, ParseError> {
    Normalizer::default().normalize_at(checker, 0)
}

#[derive(Debug, Default)]
struct Normalizer {
    /// Alternatives produced by distribution so far
    produced: usize,
}

fn enter(depth: usize) -> Result<usize, ParseError> {
    if depth >= MAX_NORMALIZE_DEPTH {
        return Err(ParseError::TooDeep {
            limit: MAX_NORMALIZE_DEPTH,
        });
    }
    Ok(depth + 1)
}

/// Rebuild a left-deep chain from its operands.
fn rejoin(first: Checker, rest: impl IntoIterator<Item = Checker>, op: LogicOp) -> Checker {
    rest.into_iter()
        .fold(first, |chain, operand| op.combine(chain, operand))
}

/// The alternatives of a union, seen through brackets at any level.
fn union_branches(checker: &Checker) -> Vec<&Checker> {
    let mut branches = Vec::new();
    let mut pending = vec![checker];

    while let Some(current) = pending.pop() {
        match current.as_or() {
            Some((left, right)) => {
                pending.push(right);
                pending.push(left);
            }
            None => branches.push(current),
        }
    }
    branches
}

impl Normalizer {
    fn normalize_at(&mut self, checker: &Checker, depth: usize) -> Result<Checker, ParseError> {
        let normalized = match checker {
            Checker::StringPrim
            | Checker::NumberPrim
            | Checker::BooleanPrim
            | Checker::DatePrim
            | Checker::TrueLit
            | Checker::FalseLit
            | Checker::NullLit
            | Checker::StringLit(_)
            | Checker::NumberLit(_)
            | Checker::BareWordLit(_) => checker.clone(),

            Checker::Object(fields) => {
                let depth = enter(depth)?;
                let mut normalized = Vec::with_capacity(fields.len());
                for field in fields {
                    normalized.push(Field::new(
                        field.name.clone(),
                        field.optional,
                        self.normalize_at(&field.checker, depth)?,
                    ));
                }
                Checker::Object(normalized)
            }
            Checker::Array(element) => {
                let depth = enter(depth)?;
                Checker::array(self.normalize_at(element, depth)?)
            }
            Checker::Bracket(content) => {
                let depth = enter(depth)?;
                Checker::bracket(self.normalize_at(content, depth)?)
            }

            Checker::Or(..) => {
                let mut branches = Vec::new();
                for branch in checker.chain(LogicOp::Or) {
                    branches.push(self.normalize_at(branch, depth)?);
                }
                let mut branches = branches.into_iter();
                match branches.next() {
                    Some(first) => rejoin(first, branches, LogicOp::Or),
                    None => checker.clone(),
                }
            }
            Checker::And(..) => {
                let mut operands = checker.chain(LogicOp::And).into_iter();
                let mut result = match operands.next() {
                    Some(first) => self.normalize_at(first, depth)?,
                    None => return Ok(checker.clone()),
                };
                for operand in operands {
                    let operand = self.normalize_at(operand, depth)?;
                    result = self.intersect(result, operand, depth)?;
                }
                result
            }
        };
        Ok(normalized)
    }

    /// Intersect two already normalized checkers.
    fn intersect(
        &mut self,
        left: Checker,
        right: Checker,
        depth: usize,
    ) -> Result<Checker, ParseError> {
        let left_branches = union_branches(&left);
        let right_branches = union_branches(&right);

        if left_branches.len() == 1 && right_branches.len() == 1 {
            return self.intersect_branch(left, right, depth);
        }

        let count = left_branches.len().saturating_mul(right_branches.len());
        self.produced = self.produced.saturating_add(count);
        if self.produced > MAX_ALTERNATIVES {
            return Err(ParseError::TooLarge {
                limit: MAX_ALTERNATIVES,
            });
        }
        tracing::trace!(count, "distributing intersection over union");

        let mut products = Vec::with_capacity(count);
        for a in &left_branches {
            for b in &right_branches {
                products.push(self.intersect_branch((*a).clone(), (*b).clone(), depth)?);
            }
        }

        let mut products = products.into_iter();
        match products.next() {
            Some(first) => Ok(rejoin(first, products, LogicOp::Or)),
            None => Ok(Checker::and(left, right)),
        }
    }

    /// Intersect two checkers neither of which is a union.
    fn intersect_branch(
        &mut self,
        left: Checker,
        right: Checker,
        depth: usize,
    ) -> Result<Checker, ParseError> {
        if let (Some(left_fields), Some(right_fields)) = (left.as_object(), right.as_object()) {
            return self
                .merge_objects(left_fields, right_fields, depth)
                .map(Checker::Object);
        }
        Ok(Checker::and(left, right))
    }

    /// Field-wise intersection of two object shapes.
    ///
    /// Keeps `left`'s field order, merging shared fields in place, then
    /// appends the fields only `right` declares.
    fn merge_objects(
        &mut self,
        left: &[Field],
        right: &[Field],
        depth: usize,
    ) -> Result<Vec<Field>, ParseError> {
        let depth = enter(depth)?;
        let mut fields = left.to_vec();

        for field in right {
            match fields.iter().position(|existing| existing.name == field.name) {
                Some(idx) => {
                    let existing = &mut fields[idx];
                    existing.checker =
                        self.intersect(existing.checker.clone(), field.checker.clone(), depth)?;
                    existing.optional = existing.optional && field.optional;
                }
                None => fields.push(field.clone()),
            }
        }
        Ok(fields)
    }
}
