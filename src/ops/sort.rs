//! Sorting sequences of mappings by one field
//!
//! Ordering rules:
//! - null and missing sort last ascending, first descending
//! - values of different kinds order by kind: bool < number < string < array < object
//! - numbers numerically, strings lexically, booleans false < true
//! - arrays and objects of the same kind compare equal
//!
//! The sort is stable, so equal values keep their input order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Returns a sorted copy of `items` ordered by `item[key]`.
pub fn sort(items: &[Value], key: &str, order: SortOrder) -> Vec<Value> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_values(present(a, key), present(b, key));

        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// `item[key]`, with null treated as missing
fn present<'a>(item: &'a Value, key: &str) -> Option<&'a Value> {
    item.get(key).filter(|value| !value.is_null())
}

/// Missing values compare greater than any present value.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_val), Some(b_val)) => {
            let a_type = type_order(a_val);
            let b_type = type_order(b_val);

            if a_type != b_type {
                return a_type.cmp(&b_type);
            }

            match (a_val, b_val) {
                (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
                (Value::Number(a_n), Value::Number(b_n)) => {
                    let a_f = a_n.as_f64().unwrap_or(0.0);
                    let b_f = b_n.as_f64().unwrap_or(0.0);
                    a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
                }
                (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
                _ => Ordering::Equal,
            }
        }
    }
}

fn type_order(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(items: &[Value]) -> Vec<Value> {
        items.iter().map(|item| item["k"].clone()).collect()
    }

    #[test]
    fn test_null_last_ascending() {
        let items = [json!({"k": 1}), json!({"k": null}), json!({"k": 2})];
        let sorted = sort(&items, "k", SortOrder::Asc);
        assert_eq!(sorted, vec![json!({"k": 1}), json!({"k": 2}), json!({"k": null})]);
    }

    #[test]
    fn test_null_first_descending() {
        let items = [json!({"k": 1}), json!({}), json!({"k": 2})];
        let sorted = sort(&items, "k", SortOrder::Desc);
        assert_eq!(sorted, vec![json!({}), json!({"k": 2}), json!({"k": 1})]);
    }

    #[test]
    fn test_sort_by_string() {
        let cars = [json!({"name": "Ford"}), json!({"name": "BMW"})];
        let sorted = sort(&cars, "name", SortOrder::Asc);
        assert_eq!(sorted[0]["name"], "BMW");

        let sorted = sort(&cars, "name", SortOrder::Desc);
        assert_eq!(sorted[0]["name"], "Ford");
    }

    #[test]
    fn test_sort_stable() {
        let items = [
            json!({"k": 1, "id": "a"}),
            json!({"k": null, "id": "b"}),
            json!({"k": 1, "id": "c"}),
            json!({"id": "d"}),
        ];
        let sorted = sort(&items, "k", SortOrder::Asc);
        let ids: Vec<_> = sorted.iter().map(|item| item["id"].clone()).collect();
        assert_eq!(ids, vec![json!("a"), json!("c"), json!("b"), json!("d")]);
    }

    #[test]
    fn test_mixed_kinds() {
        let items = [json!({"k": "x"}), json!({"k": 3}), json!({"k": true}), json!({"k": 2.5})];
        let sorted = sort(&items, "k", SortOrder::Asc);
        assert_eq!(keys(&sorted), vec![json!(true), json!(2.5), json!(3), json!("x")]);
    }

    #[test]
    fn test_order_serde() {
        let order: SortOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, SortOrder::Desc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }
}
