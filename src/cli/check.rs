//! Check JSON input against a type

use super::{CliError, json_to_value};
use crate::{CheckOptions, check, compile_type, output::TypePrinter};

/// Arguments for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// The type expression to check against
    pub type_text: String,
    /// JSON input string
    pub input: Option<String>,
    /// Accept 0/1 for booleans
    pub casual_boolean: bool,
    /// Read RFC 3339 strings as dates
    pub parse_dates: bool,
    /// Only compile the type, don't check input
    pub syntax_only: bool,
    /// Pretty-print the compiled type
    pub pretty: bool,
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    /// The type compiled; carries its normalized text
    SyntaxValid(String),
    /// The input matched the type
    Valid,
}

/// Execute a shape check operation
pub fn execute_check(args: &CheckArgs) -> Result<CheckResult, CliError> {
    let checker = compile_type(&args.type_text)?;

    if args.syntax_only {
        let text = TypePrinter::new(args.pretty).print(&checker);
        return Ok(CheckResult::SyntaxValid(text));
    }

    let json_str = args.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let value = json_to_value(json_value, args.parse_dates);

    let options = CheckOptions::default().with_casual_boolean(args.casual_boolean);
    check(&checker, &value, &options)?;

    Ok(CheckResult::Valid)
}
