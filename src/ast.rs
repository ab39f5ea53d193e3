//! # Shape Type Language - Checker Tree
//!
//! This module defines the in-memory representation of a parsed type
//! expression. A type string such as
//!
//! ```text
//! { id: string, tags?: Array<string> } & ({ kind: 'a' } | { kind: 'b' })
//! ```
//!
//! is turned into a [`Checker`] tree that can be evaluated against a
//! [`Value`](crate::Value) any number of times.
//!
//! ## Architecture Overview
//!
//! - **[checker]** - The closed [`Checker`] sum type and object [`Field`]s
//! - **[terms]** - Flat logic terms produced while parsing a logic expression
//!
//! ## Core Concepts
//!
//! ### Leaf types
//!
//! - **Primitives** `string`, `number`, `boolean`, `Date`
//! - **Singletons** `true`, `false`, `null`
//! - **Literals** `'text'`, `"text"`, `42`, `3.5`, and bare words such as `active`
//! - **Objects** `{ name: string, age?: number }` - closed: extra keys are rejected
//! - **Arrays** `Array<T>`
//!
//! ### Logic
//!
//! `&` binds tighter than `|`, and parentheses group:
//!
//! ```text
//! { a: number } | { b: number } & { c: number }
//! // reads as
//! { a: number } | ({ b: number } & { c: number })
//! ```
//!
//! ### Normalization
//!
//! Intersections of unions are distributed and intersections of objects are
//! merged field by field before evaluation (see [`crate::normalize`]).
pub mod checker;
pub mod terms;

pub use checker::{Checker, Field};
pub use terms::{LogicOp, Term};
