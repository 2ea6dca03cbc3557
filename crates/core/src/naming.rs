//! Field-name conventions.
//!
//! The backend speaks snake_case (`tax_number`), the dashboard camelCase
//! (`taxNumber`). Typed records do the renaming through serde attributes; the
//! helpers here cover untyped JSON (report payloads, free-form filters).

use serde_json::{Map, Value};

/// `tax_number` → `taxNumber`.
///
/// Leading underscores are kept, repeated underscores collapse.
pub fn snake_to_camel(key: &str) -> String {
    let leading = key.len() - key.trim_start_matches('_').len();
    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..leading]);

    let mut upper_next = false;
    for ch in key[leading..].chars() {
        if ch == '_' {
            upper_next = !out[leading..].is_empty();
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `taxNumber` → `tax_number`.
///
/// A run of capitals is one word: `customerID` → `customer_id`,
/// `HTTPStatus` → `http_status`.
pub fn camel_to_snake(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let starts_word = match prev {
                None => false,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                Some(_) => true,
            };
            if starts_word && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Recursively rename every object key to camelCase.
pub fn camelize_keys(value: Value) -> Value {
    rename_keys(value, &snake_to_camel)
}

/// Recursively rename every object key to snake_case.
pub fn snakify_keys(value: Value) -> Value {
    rename_keys(value, &camel_to_snake)
}

fn rename_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let renamed: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (rename(&k), rename_keys(v, rename)))
                .collect();
            Value::Object(renamed)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(|v| rename_keys(v, rename)).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_single_keys() {
        assert_eq!(snake_to_camel("tax_number"), "taxNumber");
        assert_eq!(snake_to_camel("id"), "id");
        assert_eq!(snake_to_camel("_meta_info"), "_metaInfo");
        assert_eq!(snake_to_camel("a__b"), "aB");
        assert_eq!(camel_to_snake("taxNumber"), "tax_number");
        assert_eq!(camel_to_snake("isDefault"), "is_default");
        assert_eq!(camel_to_snake("Name"), "name");
    }

    #[test]
    fn capital_runs_are_one_word() {
        assert_eq!(camel_to_snake("customerID"), "customer_id");
        assert_eq!(camel_to_snake("HTTPStatus"), "http_status");
        assert_eq!(camel_to_snake("skuURLPrefix"), "sku_url_prefix");
        assert_eq!(camel_to_snake("ID"), "id");
        assert_eq!(camel_to_snake("line2Total"), "line2_total");
    }

    #[test]
    fn renames_nested_structures() {
        let backend = json!({
            "total_sales": 10,
            "top_products": [{ "product_name": "Tea", "units_sold": 3 }],
        });

        let front = camelize_keys(backend.clone());
        assert_eq!(front["totalSales"], 10);
        assert_eq!(front["topProducts"][0]["productName"], "Tea");

        assert_eq!(snakify_keys(front), backend);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Single-letter words run together in camelCase (`a_b_c` is `aBC`),
            // so they cannot come back apart.
            #[test]
            fn snake_keys_survive_a_round_trip(key in "[a-z]{2,8}(_[a-z]{2,8}){0,4}") {
                prop_assert_eq!(camel_to_snake(&snake_to_camel(&key)), key);
            }

            #[test]
            fn camel_keys_have_no_underscores(key in "[a-z]{1,8}(_[a-z]{1,8}){0,4}") {
                prop_assert!(!snake_to_camel(&key).contains('_'));
            }
        }
    }
}
