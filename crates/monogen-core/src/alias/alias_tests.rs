#![allow(non_snake_case)]

use super::*;

fn sample_map() -> AliasMap {
    let mut types = TypeAssignments::new();
    types.insert("a".into(), "i64".into());
    types.insert("b".into(), "Vec<f64>".into());

    AliasMap::new(types)
}

// type_of tests

#[test]
fn AliasMap___type_of_bound_alias___returns_exact_binding() {
    let aliases = sample_map();

    assert_eq!(aliases.type_of("a").unwrap(), "i64");
    assert_eq!(aliases.type_of("b").unwrap(), "Vec<f64>");
}

#[test]
fn AliasMap___type_of_unbound_alias___fails_with_unknown_alias() {
    let aliases = sample_map();

    let err = aliases.type_of("missing").unwrap_err();

    assert!(matches!(err, GenerateError::UnknownAlias(ref a) if a == "missing"));
    assert_eq!(err.to_string(), "unknown alias 'missing'");
}

// identifier tests

#[test]
fn AliasMap___identifier_of_plain_type___is_the_type_itself() {
    let aliases = sample_map();

    assert_eq!(aliases.identifier("a").unwrap(), "i64");
}

#[test]
fn AliasMap___identifier_of_unbound_alias___propagates_unknown_alias() {
    let aliases = sample_map();

    let err = aliases.identifier("missing").unwrap_err();

    assert!(matches!(err, GenerateError::UnknownAlias(_)));
}

// parse_binding tests

#[test]
fn parse_binding___simple___splits_alias_and_type() {
    let (alias, type_expr) = parse_binding("a:i64").unwrap();

    assert_eq!(alias, "a");
    assert_eq!(type_expr, "i64");
}

#[test]
fn parse_binding___path_type___splits_on_first_colon_only() {
    let (alias, type_expr) = parse_binding("m:std::vec::Vec<u8>").unwrap();

    assert_eq!(alias, "m");
    assert_eq!(type_expr, "std::vec::Vec<u8>");
}

#[test]
fn parse_binding___no_separator___fails() {
    let err = parse_binding("noseparator").unwrap_err();

    assert!(matches!(err, GenerateError::InvalidBinding(_)));
}

#[test]
fn parse_binding___empty_alias___fails() {
    assert!(parse_binding(":i64").is_err());
}

#[test]
fn parse_binding___empty_type___fails() {
    assert!(parse_binding("a:").is_err());
}

// parse_bindings tests

#[test]
fn parse_bindings___multiple___collects_all_pairs() {
    let bindings = vec!["a:i64".to_string(), "b:f64".to_string()];

    let types = parse_bindings(&bindings).unwrap();

    assert_eq!(types.len(), 2);
    assert_eq!(types["a"], "i64");
    assert_eq!(types["b"], "f64");
}

#[test]
fn parse_bindings___repeated_alias___keeps_last_binding() {
    let bindings = vec!["a:i64".to_string(), "a:f64".to_string()];

    let types = parse_bindings(&bindings).unwrap();

    assert_eq!(types.len(), 1);
    assert_eq!(types["a"], "f64");
}

#[test]
fn parse_bindings___one_invalid___fails_whole_parse() {
    let bindings = vec!["a:i64".to_string(), "broken".to_string()];

    assert!(parse_bindings(&bindings).is_err());
}
