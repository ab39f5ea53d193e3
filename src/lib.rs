pub mod ast;
pub mod cache;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod scanner;
pub mod value;

pub use ast::{Checker, Field, LogicOp, Term};
pub use cache::TypeCache;
pub use error::Error;
pub use evaluator::{CheckOptions, Evaluator, ValidationError, check, check_type};
pub use normalize::normalize;
pub use output::{to_type_text, to_type_text_pretty};
pub use parser::{ParseError, Parser, compile_type, parse};
pub use value::Value;
