//! Onboarding tutorial content for shape CLI

/// Get the onboarding tutorial content
pub fn get_onboarding_content() -> &'static str {
    r#"WELCOME TO SHAPE

Shape checks JSON values against type expressions.

STEP 1: PRIMITIVES
------------------
  shape check 'string' --input '"Alice"'
  => valid

STEP 2: OBJECTS
---------------
Objects are closed: every key must be declared.

  shape check '{ name: string, age?: number }' --input '{"name": "Alice"}'
  => valid

STEP 3: LITERALS AND UNIONS
---------------------------
  shape check "'y' | 'n'" --input '"y"'
  => valid

STEP 4: ARRAYS
--------------
  shape check 'Array<number>' --input '[1, 2, 3]'
  => valid

STEP 5: INTERSECTIONS
---------------------
& merges object shapes and binds tighter than |.

  shape check '{ id: string } & ({ tel: string } | { email: string })' \
    --input '{"id": "u1", "email": "a@b.c"}'
  => valid

STEP 6: INSPECTING A TYPE
-------------------------
  shape check '{ a: number } & { b: string }' --syntax-only
  => { a: number, b: string }

NEXT STEPS
----------
  shape docs              List all documentation categories
  shape doc logic         Precedence and object intersection
  shape doc objects       Closed object rules
"#
}
