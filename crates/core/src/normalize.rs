//! Input normalization for slide params arriving as JSON.
//!
//! Callers frequently pass a list where a template expects a single string
//! (a title produced by a bulleted generator, for instance). A scalar field
//! given as a list takes the list's first element, and an empty list falls
//! back to the template's default. Numbers and booleans given for text
//! fields become their text form. The template's own defaults decide which
//! fields are scalars.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Normalizer for one template's params, built from that template's defaults.
#[derive(Debug, Clone)]
pub struct ParamNormalizer {
    /// Template name, for error messages and logs.
    template: String,

    /// JSON form of the template's default params.
    defaults: Map<String, Value>,
}

impl ParamNormalizer {
    /// Create a normalizer from a template's serialized defaults.
    ///
    /// Defaults that are not a JSON object yield a normalizer that passes
    /// every field through untouched.
    pub fn new(template: impl Into<String>, defaults: Value) -> Self {
        let defaults = match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            template: template.into(),
            defaults,
        }
    }

    /// Normalize a params value.
    ///
    /// - `null` becomes an empty object (all defaults).
    /// - Scalar fields given as lists take their first element; empty lists
    ///   are removed so the default applies.
    /// - A single string given for a list-of-strings field becomes a
    ///   one-item list.
    /// - Record lists are normalized item by item against the first default
    ///   record.
    pub fn normalize(&self, input: Value) -> Result<Value> {
        let mut map = match input {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            _ => return Err(Error::NotAnObject(self.template.clone())),
        };

        let unknown = self.unknown_keys(&map);
        if !unknown.is_empty() {
            log::warn!(
                "{}: ignoring unknown params: {}",
                self.template,
                unknown.join(", ")
            );
        }

        collapse_object(&self.template, &mut map, &self.defaults);
        Ok(Value::Object(map))
    }

    /// Keys of `input` that the template does not declare.
    pub fn unknown_keys(&self, input: &Map<String, Value>) -> Vec<String> {
        input
            .keys()
            .filter(|k| !self.defaults.contains_key(k.as_str()))
            .cloned()
            .collect()
    }
}

/// Apply scalar/list normalization to every field of `input` that `defaults` declares.
fn collapse_object(template: &str, input: &mut Map<String, Value>, defaults: &Map<String, Value>) {
    let mut emptied = Vec::new();

    for (key, value) in input.iter_mut() {
        let Some(default) = defaults.get(key) else {
            continue;
        };

        match default {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                if let Value::Array(items) = value {
                    if items.is_empty() {
                        log::debug!("{}: empty list for {}, using default", template, key);
                        emptied.push(key.clone());
                        continue;
                    }
                    log::debug!(
                        "{}: using first of {} values for {}",
                        template,
                        items.len(),
                        key
                    );
                    let first = items.swap_remove(0);
                    *value = first;
                }
                if default.is_string() && stringify_scalar(value) {
                    log::debug!("{}: treating {} as text", template, key);
                }
            }
            Value::Array(default_items) => {
                let holds_text = matches!(default_items.first(), None | Some(Value::String(_)));
                match value {
                    Value::String(_) | Value::Number(_) | Value::Bool(_) if holds_text => {
                        log::debug!("{}: wrapping single value for {}", template, key);
                        stringify_scalar(value);
                        let single = value.take();
                        *value = Value::Array(vec![single]);
                    }
                    Value::Array(items) if holds_text => {
                        for item in items.iter_mut() {
                            stringify_scalar(item);
                        }
                    }
                    Value::Array(items) => {
                        if let Some(Value::Object(record_defaults)) = default_items.first() {
                            for item in items.iter_mut() {
                                if let Value::Object(record) = item {
                                    collapse_object(template, record, record_defaults);
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    for key in emptied {
        input.remove(&key);
    }
}

/// Turn a number or boolean into its text form. Returns whether it changed.
fn stringify_scalar(value: &mut Value) -> bool {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return false,
    };
    *value = Value::String(text);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalizer() -> ParamNormalizer {
        ParamNormalizer::new(
            "test_slide",
            json!({
                "title": "Default Title",
                "show_logo": true,
                "items": ["one", "two"],
                "members": [{"name": "Jane", "role": "CEO"}],
            }),
        )
    }

    #[test]
    fn test_list_for_scalar_takes_first() {
        let out = normalizer()
            .normalize(json!({"title": ["first", "second"]}))
            .unwrap();
        assert_eq!(out, json!({"title": "first"}));
    }

    #[test]
    fn test_empty_list_for_scalar_removed() {
        let out = normalizer().normalize(json!({"title": []})).unwrap();
        assert_eq!(out, json!({}));
    }

    #[test]
    fn test_list_for_bool_takes_first() {
        let out = normalizer().normalize(json!({"show_logo": [false]})).unwrap();
        assert_eq!(out, json!({"show_logo": false}));
    }

    #[test]
    fn test_list_fields_untouched() {
        let input = json!({"items": ["a", "b", "c"]});
        let out = normalizer().normalize(input.clone()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_single_string_for_list_wrapped() {
        let out = normalizer().normalize(json!({"items": "only"})).unwrap();
        assert_eq!(out, json!({"items": ["only"]}));
    }

    #[test]
    fn test_record_fields_collapsed() {
        let out = normalizer()
            .normalize(json!({"members": [{"name": ["Ann", "Bo"], "role": []}]}))
            .unwrap();
        assert_eq!(out, json!({"members": [{"name": "Ann"}]}));
    }

    #[test]
    fn test_numbers_for_text_become_text() {
        let out = normalizer()
            .normalize(json!({"title": 3, "show_logo": false}))
            .unwrap();
        assert_eq!(out, json!({"title": "3", "show_logo": false}));

        let out = normalizer().normalize(json!({"title": [2026, 2030]})).unwrap();
        assert_eq!(out, json!({"title": "2026"}));
    }

    #[test]
    fn test_numbers_in_text_lists_become_text() {
        let out = normalizer().normalize(json!({"items": [1, 2.5, true]})).unwrap();
        assert_eq!(out, json!({"items": ["1", "2.5", "true"]}));

        let out = normalizer().normalize(json!({"items": 7})).unwrap();
        assert_eq!(out, json!({"items": ["7"]}));
    }

    #[test]
    fn test_numbers_in_records_become_text() {
        let out = normalizer()
            .normalize(json!({"members": [{"name": 98, "role": [1, 2]}]}))
            .unwrap();
        assert_eq!(out, json!({"members": [{"name": "98", "role": "1"}]}));
    }

    #[test]
    fn test_null_is_empty_object() {
        let out = normalizer().normalize(Value::Null).unwrap();
        assert_eq!(out, json!({}));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = normalizer().normalize(json!("title")).unwrap_err();
        assert!(matches!(err, Error::NotAnObject(name) if name == "test_slide"));
    }

    #[test]
    fn test_unknown_keys() {
        let n = normalizer();
        let input = json!({"title": "x", "colour": "red"});
        let Value::Object(map) = input else {
            unreachable!()
        };
        assert_eq!(n.unknown_keys(&map), vec!["colour".to_string()]);
    }
}
