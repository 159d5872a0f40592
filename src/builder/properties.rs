//! Variable → Property mapping
//!
//! Type dispatch is an exact, case-sensitive lookup on the declared Terraform
//! type. Unknown types produce an untyped property.

use serde_json::Value;
use solution_types::{BlueprintVariable, Property, PropertyKind, PropertyType, VariableConstraint};

/// Declared variable type → property type
pub const TYPE_DISPATCH: &[(&str, PropertyType)] = &[
    ("string", PropertyType::String),
    ("bool", PropertyType::Boolean),
    ("list", PropertyType::Array),
    // Terraform uses "number" for integers too; the textproto may need a manual edit.
    ("number", PropertyType::Number),
];

pub fn property_type_for(var_type: &str) -> Option<PropertyType> {
    TYPE_DISPATCH
        .iter()
        .find(|(declared, _)| *declared == var_type)
        .map(|(_, property_type)| *property_type)
}

/// Map one variable and its optional UI constraint to a property
pub fn map_property(
    variable: &BlueprintVariable,
    constraint: Option<&VariableConstraint>,
) -> Property {
    let is_hidden = constraint.map(|c| c.invisible).unwrap_or(false);
    let validation_regex = constraint
        .and_then(|c| c.regex_validation.clone())
        .filter(|regex| !regex.is_empty());
    let min = constraint.and_then(|c| c.min);
    let max = constraint.and_then(|c| c.max);

    let kind = match property_type_for(&variable.var_type) {
        Some(property_type) => Some(property_kind(property_type, variable, min, max)),
        None => {
            tracing::warn!(
                variable = %variable.name,
                var_type = %variable.var_type,
                "unrecognized variable type, property type left unset"
            );
            None
        }
    };

    Property {
        name: variable.name.clone(),
        is_required: variable.required,
        is_hidden,
        validation_regex,
        kind,
    }
}

fn property_kind(
    property_type: PropertyType,
    variable: &BlueprintVariable,
    min: Option<f64>,
    max: Option<f64>,
) -> PropertyKind {
    let default_value = || variable.default_value.as_ref().and_then(stringify_default);

    match property_type {
        PropertyType::String => PropertyKind::String {
            default_value: default_value(),
            min_length: min.map(bound_to_count),
            max_length: max.map(bound_to_count),
        },
        PropertyType::Boolean => PropertyKind::Boolean {
            default_value: default_value(),
        },
        PropertyType::Array => PropertyKind::Array {
            min_items: min.map(bound_to_count),
            max_items: max.map(bound_to_count),
        },
        PropertyType::Number => PropertyKind::Number {
            default_value: default_value(),
            minimum: min,
            maximum: max,
        },
    }
}

/// UI bounds are floating point; lengths and item counts are integral.
///
/// Fractions truncate toward zero and negative bounds clamp to 0.
fn bound_to_count(bound: f64) -> i32 {
    bound.max(0.0) as i32
}

/// Render a default value the way Go's `%v` verb prints decoded YAML.
///
/// `null` means no default.
pub fn stringify_default(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(format_value(other)),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "<nil>".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", inner.join(" "))
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let inner: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", k, format_value(v)))
                .collect();
            format!("map[{}]", inner.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variable(name: &str, var_type: &str, default: Option<Value>) -> BlueprintVariable {
        BlueprintVariable {
            name: name.to_string(),
            var_type: var_type.to_string(),
            required: true,
            default_value: default,
            ..Default::default()
        }
    }

    fn bounds(min: f64, max: f64) -> VariableConstraint {
        VariableConstraint {
            invisible: true,
            min: Some(min),
            max: Some(max),
            regex_validation: Some("^[a-z]+$".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_dispatch_table() {
        assert_eq!(property_type_for("string"), Some(PropertyType::String));
        assert_eq!(property_type_for("bool"), Some(PropertyType::Boolean));
        assert_eq!(property_type_for("list"), Some(PropertyType::Array));
        assert_eq!(property_type_for("number"), Some(PropertyType::Number));
        assert_eq!(property_type_for("String"), None);
        assert_eq!(property_type_for("map(string)"), None);
        assert_eq!(property_type_for(""), None);
    }

    #[test]
    fn test_string_property_with_constraint() {
        let v = variable("bucket", "string", Some(json!("my-bucket")));
        let c = bounds(3.0, 63.0);
        let p = map_property(&v, Some(&c));
        assert_eq!(p.name, "bucket");
        assert!(p.is_required);
        assert!(p.is_hidden);
        assert_eq!(p.validation_regex.as_deref(), Some("^[a-z]+$"));
        assert_eq!(
            p.kind,
            Some(PropertyKind::String {
                default_value: Some("my-bucket".into()),
                min_length: Some(3),
                max_length: Some(63),
            })
        );
    }

    #[test]
    fn test_bool_property_default_false_is_kept() {
        let v = variable("enable_cdn", "bool", Some(json!(false)));
        let p = map_property(&v, None);
        assert_eq!(
            p.kind,
            Some(PropertyKind::Boolean {
                default_value: Some("false".into())
            })
        );
        assert!(!p.is_hidden);
        assert_eq!(p.validation_regex, None);
    }

    #[test]
    fn test_list_property_has_item_bounds_and_no_default() {
        let v = variable("zones", "list", Some(json!(["a", "b"])));
        let p = map_property(&v, Some(&bounds(1.0, 3.0)));
        assert_eq!(
            p.kind,
            Some(PropertyKind::Array {
                min_items: Some(1),
                max_items: Some(3),
            })
        );
    }

    #[test]
    fn test_count_bounds_truncate_and_clamp() {
        let v = variable("name", "string", None);
        let p = map_property(&v, Some(&bounds(2.7, 63.9)));
        assert_eq!(
            p.kind,
            Some(PropertyKind::String {
                default_value: None,
                min_length: Some(2),
                max_length: Some(63),
            })
        );

        let v = variable("zones", "list", None);
        let p = map_property(&v, Some(&bounds(-4.0, 3.0)));
        assert_eq!(
            p.kind,
            Some(PropertyKind::Array {
                min_items: Some(0),
                max_items: Some(3),
            })
        );
    }

    #[test]
    fn test_number_property_bounds() {
        let v = variable("node_count", "number", Some(json!(3)));
        let p = map_property(&v, Some(&bounds(1.0, 10.5)));
        assert_eq!(
            p.kind,
            Some(PropertyKind::Number {
                default_value: Some("3".into()),
                minimum: Some(1.0),
                maximum: Some(10.5),
            })
        );
    }

    #[test]
    fn test_unknown_type_is_untyped_not_error() {
        let v = variable("labels", "map(string)", Some(json!({"a": "b"})));
        let p = map_property(&v, Some(&bounds(1.0, 2.0)));
        assert_eq!(p.kind, None);
        assert_eq!(p.property_type(), None);
        // constraint-derived flags still apply
        assert!(p.is_hidden);
    }

    #[test]
    fn test_missing_constraint_yields_zero_values() {
        let v = variable("region", "string", None);
        let p = map_property(&v, None);
        assert!(!p.is_hidden);
        assert_eq!(p.validation_regex, None);
        assert_eq!(
            p.kind,
            Some(PropertyKind::String {
                default_value: None,
                min_length: None,
                max_length: None,
            })
        );
    }

    #[test]
    fn test_empty_regex_is_unset() {
        let v = variable("region", "string", None);
        let c = VariableConstraint {
            regex_validation: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(map_property(&v, Some(&c)).validation_regex, None);
    }

    #[test]
    fn test_stringify_default() {
        assert_eq!(stringify_default(&Value::Null), None);
        assert_eq!(stringify_default(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(stringify_default(&json!(true)).as_deref(), Some("true"));
        assert_eq!(stringify_default(&json!(42)).as_deref(), Some("42"));
        assert_eq!(stringify_default(&json!(-7)).as_deref(), Some("-7"));
        assert_eq!(stringify_default(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(stringify_default(&json!(2.0)).as_deref(), Some("2"));
        assert_eq!(
            stringify_default(&json!(["a", 1, true])).as_deref(),
            Some("[a 1 true]")
        );
        assert_eq!(
            stringify_default(&json!({"b": 2, "a": "x"})).as_deref(),
            Some("map[a:x b:2]")
        );
        assert_eq!(stringify_default(&json!([])).as_deref(), Some("[]"));
    }
}
