//! End-to-end scenarios written as sequence literals.
#![cfg(feature = "reader")]

use tlist::{
    Assoc, Kind, Seq, SeqError, Value, apply, concat, contains, count, cut_map, enumerate, filter,
    flatten, flip, front, index_less, index_of_unique, map_find, merge_sort, parse, parse_seq,
    pop_front, second,
};

fn seq(source: &str) -> Seq {
    parse_seq(source).unwrap()
}

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

// ============================================================================
// Structural Primitives
// ============================================================================

#[test]
fn test_front_and_pop_front() {
    let s = seq("#row(a b c)");
    assert_eq!(front(&s), Ok(&sym("a")));
    assert_eq!(pop_front(&s), Ok(seq("#row(b c)")));
    assert_eq!(count(&s), 3);
}

#[test]
fn test_decomposing_empty_fails() {
    let empty = seq("()");
    assert!(matches!(
        front(&empty),
        Err(SeqError::EmptySequenceDecomposition { op: "front" })
    ));
    assert!(matches!(
        pop_front(&empty),
        Err(SeqError::EmptySequenceDecomposition { op: "pop_front" })
    ));
}

#[test]
fn test_contains_nested_by_structure() {
    let s = seq("(a (b c) 3)");
    assert!(contains(&parse("(b c)").unwrap(), &s));
    assert!(contains(&Value::Index(3), &s));
    assert!(!contains(&parse("#row(b c)").unwrap(), &s));
}

fn tuple_of_three(args: &[Value]) -> tlist::Result<Seq> {
    match args {
        [_, _, _] => Ok(Kind::new("tuple3").construct(args)),
        _ => Err(SeqError::IllFormedTransformer {
            op: "tuple_of_three",
            reason: format!("arity {}", args.len()),
        }),
    }
}

#[test]
fn test_apply_rewraps() {
    assert_eq!(apply(&Kind::new("set"), &seq("(x y)")), Ok(seq("#set(x y)")));
    assert_eq!(apply(&tuple_of_three, &seq("(x y z)")), Ok(seq("#tuple3(x y z)")));
    assert!(apply(&tuple_of_three, &seq("(x y)")).is_err());
}

// ============================================================================
// Concat / Filter / Projections
// ============================================================================

#[test]
fn test_concat_scenario() {
    let joined = concat([seq("(a b)"), seq("()"), seq("(c (d))")]);
    assert_eq!(joined, seq("(a b c (d))"));
}

#[test]
fn test_filter_scenario() {
    let s = seq("#row(a 1 b 2 c)");
    let symbols = filter(|v| v.as_symbol().is_some(), &s);
    assert_eq!(symbols, seq("#row(a b c)"));
}

#[test]
fn test_flip_and_cut_map() {
    let assoc = seq("((a 1) (b 2) (c 3))");
    assert_eq!(flip(&assoc), Ok(seq("((1 a) (2 b) (3 c))")));
    assert_eq!(cut_map(&assoc), Ok(seq("(1 2 3)")));
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_map_find_scenario() {
    let assoc = seq("((a 1) (b 2) (c 3))");
    let entry = map_find(&sym("b"), &assoc).unwrap();
    assert_eq!(entry, seq("(b 2)"));
    assert_eq!(second(&entry), Ok(&Value::Index(2)));

    assert_eq!(
        map_find(&sym("z"), &assoc),
        Err(SeqError::KeyNotFound {
            op: "map_find",
            key: sym("z"),
        })
    );
}

#[test]
fn test_duplicate_keys_are_an_error() {
    let assoc = seq("((a 1) (a 2))");
    assert!(matches!(
        map_find(&sym("a"), &assoc),
        Err(SeqError::AmbiguousKey { occurrences: 2, .. })
    ));
    assert!(matches!(
        Assoc::new(assoc),
        Err(SeqError::AmbiguousKey { op: "assoc", .. })
    ));
}

#[test]
fn test_index_of_unique_scenario() {
    let s = seq("(int float (char 8) bool)");
    assert_eq!(index_of_unique(&sym("int"), &s), Ok(0));
    assert_eq!(index_of_unique(&parse("(char 8)").unwrap(), &s), Ok(2));
    assert_eq!(index_of_unique(&sym("bool"), &s), Ok(3));
    assert!(matches!(
        index_of_unique(&sym("void"), &s),
        Err(SeqError::KeyNotFound { .. })
    ));
}

// ============================================================================
// Enumerate / Flatten / Sort
// ============================================================================

#[test]
fn test_enumerate_scenario() {
    assert_eq!(enumerate(&seq("#row(x y)")), seq("((0 x) (1 y))"));
}

#[test]
fn test_flatten_scenario() {
    assert_eq!(flatten(&seq("((1 2) (3 (4 5)) 6)")), seq("(1 2 3 4 5 6)"));
    assert_eq!(flatten(&seq("#row(#col(a (b)) () c)")), seq("#row(a b c)"));
}

#[test]
fn test_merge_sort_scenario() {
    assert_eq!(
        merge_sort(&seq("(5 3 3 1)"), index_less),
        Ok(seq("(1 3 3 5)"))
    );
}

#[test]
fn test_merge_sort_tie_order() {
    // rank-tagged copies of (5 3 3 1): the 3 from position 2 ends up first
    let by_rank = |a: &Value, b: &Value| {
        let rank = |v: &Value| v.as_seq().and_then(|s| s.get(0)).cloned();
        match (rank(a), rank(b)) {
            (Some(x), Some(y)) => index_less(&x, &y),
            _ => Ok(false),
        }
    };
    let sorted = merge_sort(&seq("((5 p0) (3 p1) (3 p2) (1 p3))"), by_rank).unwrap();
    assert_eq!(sorted, seq("((1 p3) (3 p2) (3 p1) (5 p0))"));
}

#[test]
fn test_merge_sort_by_lookup_order() {
    // sort symbols by their position in a reference ordering
    let order = seq("(low medium high critical)");
    let rank_less = |a: &Value, b: &Value| -> tlist::Result<bool> {
        Ok(index_of_unique(a, &order)? < index_of_unique(b, &order)?)
    };
    let sorted = merge_sort(&seq("#levels(high low critical medium low)"), rank_less).unwrap();
    assert_eq!(sorted, seq("#levels(low low medium high critical)"));

    let unknown = merge_sort(&seq("(high bogus)"), rank_less);
    assert!(matches!(unknown, Err(SeqError::KeyNotFound { .. })));
}
