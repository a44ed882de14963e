//! Diff generation for audit logging
//!
//! Generates human-readable diffs between before and after values
//! for audit log entries.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level fields are compared; a contact has no nested objects.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        // Phone lists are short; show them in full
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "John", "phones": ["1234567890"]});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_phone_list_change() {
        let before = json!({"name": "John", "phones": ["1234567890"]});
        let after = json!({"name": "John", "phones": ["1112223333"]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, r#"phones: ["1234567890"] -> ["1112223333"]"#);
    }

    #[test]
    fn test_birthday_added() {
        let before = json!({"name": "John", "phones": []});
        let after = json!({"name": "John", "phones": [], "birthday": "12.06.1990"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, r#"birthday: (added) -> "12.06.1990""#);
    }

    #[test]
    fn test_field_removed() {
        let before = json!({"name": "John", "birthday": "12.06.1990"});
        let after = json!({"name": "John"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("birthday"));
        assert!(diff.contains("(removed)"));
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
        assert!(generate_diff(&json!("a"), &json!("a")).is_none());
    }
}
