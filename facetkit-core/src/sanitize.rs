use serde_json::{Map, Value};

/// Backslash-escape quotes, backslashes and NUL bytes for SQL strings
pub fn add_slashes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\'' | '"' | '\\' => {
                output.push('\\');
                output.push(c);
            }
            '\0' => output.push_str("\\0"),
            _ => output.push(c),
        }
    }
    output
}

/// Escape every scalar in a JSON value, keeping arrays and objects intact
///
/// Scalars come back as strings: booleans as `"1"` or `""`, null as `""`.
pub fn sanitize(input: &Value) -> Value {
    match input {
        Value::Array(items) => Value::Array(items.iter().map(sanitize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), sanitize(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::String(s) => Value::String(add_slashes(s)),
        Value::Number(n) => Value::String(add_slashes(&n.to_string())),
        Value::Bool(true) => Value::String("1".to_string()),
        Value::Bool(false) | Value::Null => Value::String(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_slashes() {
        assert_eq!(add_slashes(r#"O'Reilly "books""#), r#"O\'Reilly \"books\""#);
        assert_eq!(add_slashes(r"C:\path"), r"C:\\path");
        assert_eq!(add_slashes("nul\0byte"), "nul\\0byte");
        assert_eq!(add_slashes("plain"), "plain");
    }

    #[test]
    fn test_sanitize_nested() {
        let input = json!({
            "name": "it's",
            "ids": [1, "2'"],
            "flags": {"on": true, "off": false, "none": null}
        });

        assert_eq!(
            sanitize(&input),
            json!({
                "name": "it\\'s",
                "ids": ["1", "2\\'"],
                "flags": {"on": "1", "off": "", "none": ""}
            })
        );
    }
}
