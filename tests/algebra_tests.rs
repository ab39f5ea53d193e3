// Normalization and precedence behaviour
//
// Each test compiles a type and checks accept/reject sets, so the algebra is
// tested through what it means rather than through tree shapes alone.

use serde_json::{Value as Json, json};
use shape_lang::{CheckOptions, Checker, Field, Value, check, compile_type, normalize};

fn accepts(type_text: &str, data: Json) -> bool {
    let checker = compile_type(type_text).unwrap();
    check(&checker, &Value::from(data), &CheckOptions::default()).is_ok()
}

fn assert_accepts(type_text: &str, data: Json) {
    let checker = compile_type(type_text).unwrap();
    if let Err(e) = check(&checker, &Value::from(data.clone()), &CheckOptions::default()) {
        panic!("{type_text} should accept {data}: {e}");
    }
}

fn assert_rejects(type_text: &str, data: Json) {
    assert!(
        !accepts(type_text, data.clone()),
        "{type_text} should reject {data}"
    );
}

// ============================================================================
// Precedence: & binds tighter than |
// ============================================================================

#[test]
fn precedence_union_of_intersection() {
    let t = "{ a: number } | { b: number } & { c: number }";
    assert_accepts(t, json!({"a": 1}));
    assert_accepts(t, json!({"b": 1, "c": 1}));
    assert_rejects(t, json!({"b": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1, "c": 1}));
}

#[test]
fn precedence_operand_order_swapped() {
    let t = "{ b: number } & { c: number } | { a: number }";
    assert_accepts(t, json!({"a": 1}));
    assert_accepts(t, json!({"b": 1, "c": 1}));
    assert_rejects(t, json!({"b": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1, "c": 1}));
}

#[test]
fn precedence_without_spaces() {
    let t = "{a:number}|{b:number}&{c:number}";
    assert_accepts(t, json!({"a": 1}));
    assert_accepts(t, json!({"b": 1, "c": 1}));
    assert_rejects(t, json!({"c": 1}));
}

// ============================================================================
// Brackets
// ============================================================================

#[test]
fn brackets_matching_default_precedence() {
    let t = "{a:number}|({b:number}&{c:number})";
    assert_accepts(t, json!({"a": 1}));
    assert_accepts(t, json!({"b": 1, "c": 1}));
    assert_rejects(t, json!({"b": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1, "c": 1}));
}

#[test]
fn brackets_change_semantics() {
    let t = "({a:number}|{b:number})&{c:number}";
    assert_accepts(t, json!({"a": 1, "c": 1}));
    assert_accepts(t, json!({"b": 1, "c": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1, "c": 1}));
    assert_rejects(t, json!({"a": 1}));
    assert_rejects(t, json!({"b": 1}));
    assert_rejects(t, json!({"c": 1}));
}

#[test]
fn brackets_on_the_right() {
    let t = "{c:number}&({a:number}|{b:number})";
    assert_accepts(t, json!({"a": 1, "c": 1}));
    assert_accepts(t, json!({"b": 1, "c": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1, "c": 1}));
    assert_rejects(t, json!({"c": 1}));
}

#[test]
fn double_brackets_still_distribute() {
    let t = "(({a:number}|{b:number}))&{c:number}";
    assert_accepts(t, json!({"a": 1, "c": 1}));
    assert_rejects(t, json!({"a": 1}));
}

#[test]
fn union_on_both_sides() {
    let t = "({a:1}|{b:1})&({c:1}|{d:1})";
    assert_accepts(t, json!({"a": 1, "c": 1}));
    assert_accepts(t, json!({"a": 1, "d": 1}));
    assert_accepts(t, json!({"b": 1, "c": 1}));
    assert_accepts(t, json!({"b": 1, "d": 1}));
    assert_rejects(t, json!({"a": 1, "b": 1}));
    assert_rejects(t, json!({"c": 1, "d": 1}));
    assert_rejects(t, json!({"a": 1}));
}

#[test]
fn intersection_inside_bracket_is_resolved() {
    // The left group is itself an intersection containing a union
    let t = "({id:string}&({a:1}|{b:1}))&{v:number}";
    assert_accepts(t, json!({"id": "x", "a": 1, "v": 2}));
    assert_accepts(t, json!({"id": "x", "b": 1, "v": 2}));
    assert_rejects(t, json!({"id": "x", "a": 1}));
    assert_rejects(t, json!({"id": "x", "a": 1, "b": 1, "v": 2}));
}

// ============================================================================
// Object field merge
// ============================================================================

#[test]
fn merge_two_objects() {
    let t = "{ UserId: string } & { Age: number }";
    assert_accepts(t, json!({"UserId": "Alice", "Age": 123}));
    assert_rejects(t, json!({"UserId": "Alice", "Age": 123, "Foo": "bar"}));
    assert_rejects(t, json!({"UserId": "Alice"}));
}

#[test]
fn merge_shared_field_optionality() {
    // Optional only when optional on both sides
    let t = "{ a?: number } & { a: number }";
    assert_rejects(t, json!({}));
    assert_accepts(t, json!({"a": 1}));

    let t = "{ a?: number } & { a?: number }";
    assert_accepts(t, json!({}));
}

#[test]
fn merge_shared_field_types_intersect() {
    let t = "{ a: { x: number } } & { a: { y: string } }";
    assert_accepts(t, json!({"a": {"x": 1, "y": "s"}}));
    assert_rejects(t, json!({"a": {"x": 1}}));
    assert_rejects(t, json!({"a": {"y": "s"}}));
}

#[test]
fn merge_shared_field_literal_union() {
    let t = "{ k: 'a' | 'b' } & { k: 'b' | 'c' }";
    assert_accepts(t, json!({"k": "b"}));
    assert_rejects(t, json!({"k": "a"}));
    assert_rejects(t, json!({"k": "c"}));
}

#[test]
fn merge_produces_single_object() {
    let merged = compile_type("{ a: number, b: string } & { c: boolean, a: number }").unwrap();
    assert_eq!(
        merged,
        Checker::Object(vec![
            Field::new("a", false, Checker::and(Checker::NumberPrim, Checker::NumberPrim)),
            Field::new("b", false, Checker::StringPrim),
            Field::new("c", false, Checker::BooleanPrim),
        ])
    );
}

#[test]
fn distribution_tree_shape() {
    let (parsed, _) = shape_lang::parse("({a:number}|{b:number})&{c:number}").unwrap();
    let normalized = normalize(&parsed).unwrap();
    let ac = Checker::Object(vec![
        Field::new("a", false, Checker::NumberPrim),
        Field::new("c", false, Checker::NumberPrim),
    ]);
    let bc = Checker::Object(vec![
        Field::new("b", false, Checker::NumberPrim),
        Field::new("c", false, Checker::NumberPrim),
    ]);
    assert_eq!(normalized, Checker::or(ac, bc));
}

#[test]
fn normalize_leaves_input_untouched() {
    let (parsed, _) = shape_lang::parse("{a:number}&{b:number}").unwrap();
    let before = parsed.clone();
    let _ = normalize(&parsed).unwrap();
    assert_eq!(parsed, before);
}

#[test]
fn non_object_intersection_checks_both() {
    let t = "string & 'x'";
    assert_accepts(t, json!("x"));
    assert_rejects(t, json!("y"));
    assert_rejects(t, json!(1));
}

// ============================================================================
// Nested intersection over union on object fields
// ============================================================================

const CONTACT: &str = "{
    Name: string,
    Contact: { Method: 'telegram' } & ({ UserId: string } | { Tel: string })
        | { Method: 'Email', Email: string }
}";

#[test]
fn contact_accepts_each_shape() {
    assert_accepts(
        CONTACT,
        json!({"Name": "a", "Contact": {"Method": "telegram", "UserId": "u1"}}),
    );
    assert_accepts(
        CONTACT,
        json!({"Name": "a", "Contact": {"Method": "telegram", "Tel": "123"}}),
    );
    assert_accepts(
        CONTACT,
        json!({"Name": "a", "Contact": {"Method": "Email", "Email": "a@b.c"}}),
    );
}

#[test]
fn contact_rejects_mixed_shapes() {
    assert_rejects(
        CONTACT,
        json!({"Name": "a", "Contact": {"Method": "telegram", "UserId": "u1", "Tel": "1"}}),
    );
    assert_rejects(
        CONTACT,
        json!({"Name": "a", "Contact": {"Method": "telegram", "Email": "a@b.c"}}),
    );
    assert_rejects(
        CONTACT,
        json!({"Name": "a", "Contact": {"Method": "Email", "UserId": "u1"}}),
    );
    assert_rejects(CONTACT, json!({"Name": "a", "Contact": {"Method": "telegram"}}));
}

#[test]
fn contact_rejects_null_and_missing() {
    assert_rejects(CONTACT, json!({"Name": "a", "Contact": null}));
    assert_rejects(CONTACT, json!({"Name": "a"}));
    assert_rejects(CONTACT, json!(null));
}

// ============================================================================
// Round trip through the printer
// ============================================================================

fn same_verdicts(type_text: &str, samples: &[Json]) {
    let compiled = compile_type(type_text).unwrap();
    let printed = compiled.to_string();
    let reparsed = compile_type(&printed)
        .unwrap_or_else(|e| panic!("printed type {printed:?} does not parse: {e}"));

    let options = CheckOptions::default();
    for sample in samples {
        let value = Value::from(sample.clone());
        assert_eq!(
            check(&compiled, &value, &options).is_ok(),
            check(&reparsed, &value, &options).is_ok(),
            "verdicts differ for {sample} ({type_text} vs {printed})"
        );
    }
}

#[test]
fn round_trip_contact() {
    same_verdicts(
        CONTACT,
        &[
            json!({"Name": "a", "Contact": {"Method": "telegram", "UserId": "u1"}}),
            json!({"Name": "a", "Contact": {"Method": "Email", "Email": "e"}}),
            json!({"Name": "a", "Contact": {"Method": "Email", "UserId": "u1"}}),
            json!({"Name": "a"}),
        ],
    );
}

#[test]
fn round_trip_literals_and_keys() {
    same_verdicts(
        r#"{ "a b"?: 'it\'s' | "q\"uote" | 'back\\slash', n: 1.50 | 2, w: word }"#,
        &[
            json!({"n": 1.5, "w": "word"}),
            json!({"a b": "it's", "n": 2, "w": "word"}),
            json!({"a b": "q\"uote", "n": 2, "w": "word"}),
            json!({"a b": "back\\slash", "n": 2, "w": "word"}),
            json!({"a b": "other", "n": 2, "w": "word"}),
            json!({"n": 3, "w": "word"}),
        ],
    );
}

#[test]
fn round_trip_arrays_and_brackets() {
    same_verdicts(
        "Array<(string | number)> | Array<{ a: boolean } & ({ b: 1 } | { c: 2 })>",
        &[
            json!(["x", 1]),
            json!([{"a": true, "b": 1}]),
            json!([{"a": true, "b": 1, "c": 2}]),
            json!([true]),
        ],
    );
}

#[test]
fn round_trip_plain_intersection_of_union() {
    // A generic & whose operand is a union must keep its brackets when printed
    let checker = Checker::and(
        Checker::StringPrim,
        Checker::or(
            Checker::StringLit("a".into()),
            Checker::StringLit("b".into()),
        ),
    );
    let printed = checker.to_string();
    assert_eq!(printed, r#"string & ("a" | "b")"#);
}
