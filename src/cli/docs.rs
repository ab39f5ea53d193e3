//! Documentation content for shape CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Literals,
    Objects,
    Arrays,
    Logic,
    Options,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "primitives" => Some(Self::Syntax),
            "literals" | "literal" => Some(Self::Literals),
            "objects" | "object" => Some(Self::Objects),
            "arrays" | "array" => Some(Self::Arrays),
            "logic" | "union" | "intersection" => Some(Self::Logic),
            "options" | "casual_boolean" => Some(Self::Options),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SHAPE DOCUMENTATION

Shape checks JSON values against structural type expressions such as
{ id: string, tags?: Array<string> } | null.

DOCUMENTATION CATEGORIES

  syntax      Primitive types and whitespace rules
  literals    String, number, boolean, null and bare-word literals
  objects     Closed object shapes and optional fields
  arrays      Array<T>
  logic       Unions (|), intersections (&) and brackets
  options     Checking options such as --casual-boolean

QUICK REFERENCE

  string number boolean Date    Primitives
  true false null               Singletons
  'text' "text" 42 1.5 word     Literals
  { a: T, b?: U }               Object (no extra keys allowed)
  Array<T>                      Array
  A & B                         Both (binds tighter)
  A | B                         Either
  ( ... )                       Grouping

Run 'shape doc <category>' for detailed documentation.
Run 'shape onboard' for a short tutorial.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Literals) => Ok(LITERALS_DOC),
        Some(DocCategory::Objects) => Ok(OBJECTS_DOC),
        Some(DocCategory::Arrays) => Ok(ARRAYS_DOC),
        Some(DocCategory::Logic) => Ok(LOGIC_DOC),
        Some(DocCategory::Options) => Ok(OPTIONS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Primitive Types

PRIMITIVES
  string     Any string
  number     Any number, integer or float
  boolean    true or false
  Date       A date value (use --parse-dates for RFC 3339 strings in JSON)

  Example:
    shape check 'number' --input '42'
    => valid

WHITESPACE
  Whitespace between tokens is ignored:
    {a:number}  and  { a : number }  are the same type.

KEYWORDS
  A keyword only counts when it is not followed by another letter:
    string      the primitive
    stringify   a bare-word literal (see 'shape doc literals')
"#;

const LITERALS_DOC: &str = r#"LITERALS - Exact Values

STRING LITERALS
  'text' or "text"
    Matches exactly that string. A backslash copies the next character:
      'it\'s'   matches  it's

NUMBER LITERALS
  42, 3.25
    Matches exactly that number. Only unsigned integers and a single
    decimal point are supported; there is no sign or exponent syntax.

SINGLETONS
  true, false, null

BARE WORDS
  active
    An identifier that is not a keyword matches the string spelled the same
    way. 'active' and active accept the same values.
"#;

const OBJECTS_DOC: &str = r#"OBJECTS - Closed Shapes

SYNTAX
  { name: string, age?: number }
    Fields are separated by ',' or ';'. A '?' after the key makes the field
    optional. Keys are bare words (letters, digits, underscore) or quoted.

CLOSED CHECKING
  Every key in the value must be declared:
    shape check '{ id: string }' --input '{"id": "a", "extra": 1}'
    => Validation failed: unexpected extra field 'extra'

  Required keys must be present; a present null still counts as present
  and is checked against the field type.

FIELD TYPES
  Any expression works as a field type:
    { kind: 'a' | 'b', payload: { x: number } & { y: number } }
"#;

const ARRAYS_DOC: &str = r#"ARRAYS - Array<T>

SYNTAX
  Array<T>
    Every element must match T. An empty array always matches.

  Examples:
    Array<string>              ["a", "b"]
    Array<{ id: number }>      [{"id": 1}, {"id": 2}]
    Array<'x' | 'y'>           ["x", "y", "x"]

ERRORS
  The first mismatching element is reported with its index:
    at index 1: expected string, got number
"#;

const LOGIC_DOC: &str = r#"LOGIC - Unions, Intersections and Brackets

OPERATORS
  A | B    the value matches A or B
  A & B    the value matches A and B

PRECEDENCE
  & binds tighter than |:
    { a: number } | { b: number } & { c: number }
  reads as
    { a: number } | ({ b: number } & { c: number })

BRACKETS
  ( ... ) groups:
    ({ a: number } | { b: number }) & { c: number }
  accepts {"a": 1, "c": 1} and {"b": 1, "c": 1} only.

OBJECT INTERSECTION
  Intersecting objects merges their fields, so closed checking still works:
    { a: number } & { b: string }   is   { a: number, b: string }

  A shared field is required unless both sides mark it optional, and its
  type is the intersection of both field types.
"#;

const OPTIONS_DOC: &str = r#"OPTIONS - Checking Options

--casual-boolean
  Accept 0 and 1 for boolean, false and true:
    shape check 'true' --input '1' --casual-boolean
    => valid

  Strings such as "true" are still rejected.

--parse-dates
  Read RFC 3339 strings in the JSON input as Date values.

--syntax-only
  Compile the type and print its normalized form without checking input.
  Add --pretty to print one object field per line.

LOGGING
  Set SHAPE_LOG (e.g. SHAPE_LOG=debug) to see compiled types on stderr.
"#;
