//! Type text rendering for checker trees.
//!
//! This module turns a [`Checker`] back into type text, in compact or
//! pretty-printed form. The output parses back to a checker that accepts the
//! same values.
//!
//! # Features
//!
//! - **Compact output** via [`to_type_text()`] - one line, used by `Display`
//! - **Pretty output** via [`to_type_text_pretty()`] - one object field per line
//! - **Quoting** - string literals and unusual keys are double-quoted with
//!   `\` and `"` escaped, which is exactly what the scanner reads back
//!
//! # Examples
//!
//! ```
//! use shape_lang::compile_type;
//! use shape_lang::output::{to_type_text, to_type_text_pretty};
//!
//! let checker = compile_type("{a:number}&{'b-c'?:'x'|'y'}").unwrap();
//!
//! assert_eq!(to_type_text(&checker), r#"{ a: number, "b-c"?: "x" | "y" }"#);
//! assert_eq!(
//!     to_type_text_pretty(&checker),
//!     "{\n  a: number,\n  \"b-c\"?: \"x\" | \"y\"\n}"
//! );
//! ```

use crate::{
    ast::{Checker, Field, LogicOp},
    scanner::is_key_char,
};

pub struct TypePrinter {
    pretty: bool,
}

impl TypePrinter {
    pub fn new(pretty: bool) -> Self {
        TypePrinter { pretty }
    }

    pub fn print(&self, checker: &Checker) -> String {
        self.print_checker(checker, 0)
    }

    fn print_checker(&self, checker: &Checker, indent: usize) -> String {
        match checker {
            Checker::StringPrim => "string".to_string(),
            Checker::NumberPrim => "number".to_string(),
            Checker::BooleanPrim => "boolean".to_string(),
            Checker::DatePrim => "Date".to_string(),
            Checker::TrueLit => "true".to_string(),
            Checker::FalseLit => "false".to_string(),
            Checker::NullLit => "null".to_string(),
            Checker::StringLit(s) => quote(s),
            Checker::NumberLit(n) => n.to_string(),
            Checker::BareWordLit(word) => word.clone(),
            Checker::Object(fields) => self.print_object(fields, indent),
            Checker::Array(element) => format!("Array<{}>", self.print_checker(element, indent)),
            Checker::And(..) => checker
                .chain(LogicOp::And)
                .into_iter()
                .map(|operand| self.print_operand(operand, indent))
                .collect::<Vec<_>>()
                .join(" & "),
            Checker::Or(..) => checker
                .chain(LogicOp::Or)
                .into_iter()
                .map(|branch| self.print_checker(branch, indent))
                .collect::<Vec<_>>()
                .join(" | "),
            Checker::Bracket(content) => format!("({})", self.print_checker(content, indent)),
        }
    }

    /// `&` operands; a bare union there needs brackets to keep its meaning.
    fn print_operand(&self, checker: &Checker, indent: usize) -> String {
        match checker {
            Checker::Or(..) => format!("({})", self.print_checker(checker, indent)),
            _ => self.print_checker(checker, indent),
        }
    }

    fn print_object(&self, fields: &[Field], indent: usize) -> String {
        if fields.is_empty() {
            return "{}".to_string();
        }

        let entries = fields.iter().map(|field| {
            format!(
                "{}{}: {}",
                print_key(&field.name),
                if field.optional { "?" } else { "" },
                self.print_checker(&field.checker, indent + 1)
            )
        });

        if self.pretty {
            let items: Vec<String> = entries
                .map(|entry| format!("{}{}", self.indent(indent + 1), entry))
                .collect();
            format!("{{\n{}\n{}}}", items.join(",\n"), self.indent(indent))
        } else {
            let items: Vec<String> = entries.collect();
            format!("{{ {} }}", items.join(", "))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

fn print_key(name: &str) -> String {
    if !name.is_empty() && name.chars().all(is_key_char) {
        name.to_string()
    } else {
        quote(name)
    }
}

fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for ch in s.chars() {
        if matches!(ch, '"' | '\\') {
            result.push('\\');
        }
        result.push(ch);
    }
    result.push('"');
    result
}

/// Render a checker as compact type text.
pub fn to_type_text(checker: &Checker) -> String {
    TypePrinter::new(false).print(checker)
}

/// Render a checker as type text with one object field per line.
pub fn to_type_text_pretty(checker: &Checker) -> String {
    TypePrinter::new(true).print(checker)
}
