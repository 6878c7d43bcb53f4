//! Tests for params module

use super::*;
use crate::error::Error;
use serde_json::{json, Map};
use test_case::test_case;

fn params(defaults: serde_json::Value, items: Vec<serde_json::Value>) -> ItemParameters {
    let defaults = match defaults {
        serde_json::Value::Object(map) => map,
        _ => Map::new(),
    };
    ItemParameters::new(defaults).with_items(items).unwrap()
}

#[test]
fn test_item_values_override_defaults() {
    let p = params(
        json!({"resource": "product", "limit": 50}),
        vec![json!({"limit": 5}), json!({})],
    );

    assert_eq!(p.item_count(), 2);
    assert_eq!(p.get_param("limit", 0), Some(json!(5)));
    assert_eq!(p.get_param("limit", 1), Some(json!(50)));
    assert_eq!(p.get_param("resource", 0), Some(json!("product")));
    assert_eq!(p.get_param("missing", 0), None);
    // Out-of-range items still see defaults
    assert_eq!(p.get_param("resource", 9), Some(json!("product")));
}

#[test]
fn test_items_must_be_objects() {
    let err = ItemParameters::default()
        .with_items(vec![json!({}), json!([1])])
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("input item 1"));
}

#[test]
fn test_builder_helpers() {
    let mut item = Map::new();
    item.insert("id".into(), json!("42"));
    let p = ItemParameters::default()
        .with_default("resource", "order")
        .push_item(item);

    assert_eq!(p.item(0).string("id").unwrap(), "42");
    assert_eq!(p.item(0).string("resource").unwrap(), "order");
}

#[test]
fn test_required_string() {
    let p = params(json!({}), vec![json!({"id": "  ", "n": 7, "flag": true})]);
    let item = p.item(0);

    let err = item.string("id").unwrap_err();
    assert!(matches!(err, Error::MissingParameter { ref name, item_index: 0 } if name == "id"));
    assert_eq!(item.string("n").unwrap(), "7");
    assert!(item.string("flag").unwrap_err().is_validation());
}

#[test]
fn test_null_counts_as_unset() {
    let p = params(json!({"query": null}), vec![json!({"query": null}), json!({})]);
    assert_eq!(p.item(0).optional_string("query").unwrap(), None);
    assert_eq!(p.item(1).optional_string("query").unwrap(), None);
}

#[test]
fn test_null_item_value_falls_back_to_default() {
    let p = params(json!({"limit": 5, "query": "default"}), vec![json!({"limit": null, "query": null})]);
    assert_eq!(p.item(0).u32_or("limit", 50).unwrap(), 5);
    assert_eq!(p.item(0).optional_string("query").unwrap().as_deref(), Some("default"));
    assert_eq!(p.get_param("limit", 0), Some(json!(5)));
}

#[test_case(json!(true), true)]
#[test_case(json!(false), false)]
#[test_case(json!("TRUE"), true)]
#[test_case(json!(" false "), false)]
fn test_bool_or(value: serde_json::Value, expected: bool) {
    let p = params(json!({}), vec![json!({ "returnAll": value })]);
    assert_eq!(p.item(0).bool_or("returnAll", !expected).unwrap(), expected);
}

#[test]
fn test_bool_or_default_and_invalid() {
    let p = params(json!({}), vec![json!({"a": "yes", "b": 1})]);
    assert!(p.item(0).bool_or("missing", true).unwrap());
    assert!(p.item(0).bool_or("a", false).unwrap_err().is_validation());
    assert!(p.item(0).bool_or("b", false).unwrap_err().is_validation());
}

#[test_case(json!(25), Some(25))]
#[test_case(json!("10"), Some(10))]
#[test_case(json!(-1), None)]
#[test_case(json!(1.5), None)]
#[test_case(json!("ten"), None)]
#[test_case(json!([]), None)]
fn test_u32_or(value: serde_json::Value, expected: Option<u32>) {
    let p = params(json!({}), vec![json!({ "limit": value })]);
    let result = p.item(0).u32_or("limit", 50);
    match expected {
        Some(v) => assert_eq!(result.unwrap(), v),
        None => assert!(result.unwrap_err().is_validation()),
    }
}

#[test]
fn test_u32_or_default() {
    let p = params(json!({}), vec![json!({})]);
    assert_eq!(p.item(0).u32_or("limit", 50).unwrap(), 50);
    assert_eq!(p.item(0).item_index(), 0);
}
