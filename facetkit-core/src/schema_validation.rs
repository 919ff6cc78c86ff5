use serde_json::{json, Value};

/// JSON Schema for the settings blob
///
/// Both collections are optional; every entry needs a string `name`.
pub fn settings_schema() -> Value {
    let named_record = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "minLength": 1}
        },
        "required": ["name"]
    });

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": ["object", "null"],
        "properties": {
            "facets": {"type": ["array", "null"], "items": named_record.clone()},
            "templates": {"type": ["array", "null"], "items": named_record}
        }
    })
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings_pass() {
        let data = json!({
            "facets": [{"name": "color", "type": "checkboxes"}],
            "templates": [{"name": "shop"}]
        });
        assert!(validate_against_schema(&settings_schema(), &data).is_ok());
    }

    #[test]
    fn test_null_collections_pass() {
        let data = json!({"facets": null});
        assert!(validate_against_schema(&settings_schema(), &data).is_ok());
        assert!(validate_against_schema(&settings_schema(), &Value::Null).is_ok());
    }

    #[test]
    fn test_missing_names_fail() {
        let data = json!({
            "facets": [{"type": "checkboxes"}],
            "templates": [{"name": 4}]
        });

        let errors = validate_against_schema(&settings_schema(), &data).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("/facets/0")));
        assert!(errors.iter().any(|e| e.contains("/templates/0/name")));
    }

    #[test]
    fn test_wrong_collection_type_fails() {
        let data = json!({"facets": "color"});
        assert!(validate_against_schema(&settings_schema(), &data).is_err());
    }
}
