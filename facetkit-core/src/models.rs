use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Site-wide faceting configuration
///
/// Missing or `null` collections deserialize to empty vectors. Unknown top
/// level keys are kept in `extra` so a load/save cycle is lossless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub facets: Vec<Facet>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub templates: Vec<Template>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub facet_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Facet {
    /// Look up a setting by its key, including the typed fields
    pub fn setting(&self, key: &str) -> Option<Value> {
        match key {
            "name" => Some(Value::String(self.name.clone())),
            "label" => self.label.clone().map(Value::String),
            "type" => self.facet_type.clone().map(Value::String),
            "source" => self.source.clone().map(Value::String),
            _ => self.extra.get(key).cloned(),
        }
    }

    /// Display label, falling back to the facet name
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A taxonomy term as handed over by a [`crate::terms::TermSource`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub term_id: u64,
    pub name: String,
    /// Parent term id, `0` for top-level terms
    #[serde(default)]
    pub parent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDepth {
    pub parent_id: u64,
    pub depth: u32,
}

/// One row of facet values produced by the indexer
///
/// Rows are keyed by `facet_value`; children point at their parent through
/// `parent_id`. Everything else travels untouched in `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValueRow {
    #[serde(deserialize_with = "required_key")]
    pub facet_value: String,
    #[serde(default, deserialize_with = "optional_key", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub depth: u32,
    /// Dotted position path, filled in by the hierarchical sort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl FacetValueRow {
    pub fn new(facet_value: impl Into<String>, parent_id: Option<&str>, depth: u32) -> Self {
        Self {
            facet_value: facet_value.into(),
            parent_id: parent_id.map(str::to_string),
            depth,
            order: None,
            payload: Map::new(),
        }
    }

    /// Attach a payload field, builder style
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }

    /// Number of matching results, read from the `counter` payload field
    pub fn count(&self) -> u64 {
        match self.payload.get("counter") {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Human readable value, falling back to the raw key
    pub fn display_value(&self) -> &str {
        self.payload
            .get("facet_display_value")
            .and_then(Value::as_str)
            .unwrap_or(&self.facet_value)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Indexer keys are stored as strings but term ids often arrive as numbers.
fn optional_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number key, found {}",
            other
        ))),
    }
}

fn required_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_key(deserializer)?.ok_or_else(|| serde::de::Error::custom("facet_value cannot be null"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_null_collections_default_to_empty() {
        let settings: Settings = serde_json::from_value(json!({
            "facets": null,
            "thousands_separator": ","
        }))
        .unwrap();

        assert!(settings.facets.is_empty());
        assert!(settings.templates.is_empty());
        assert_eq!(settings.extra.get("thousands_separator"), Some(&json!(",")));
    }

    #[test]
    fn test_facet_setting_reads_typed_and_extra_fields() {
        let facet: Facet = serde_json::from_value(json!({
            "name": "categories",
            "type": "checkboxes",
            "hierarchical": "yes"
        }))
        .unwrap();

        assert_eq!(facet.setting("type"), Some(json!("checkboxes")));
        assert_eq!(facet.setting("hierarchical"), Some(json!("yes")));
        assert_eq!(facet.setting("label"), None);
        assert_eq!(facet.display_label(), "categories");
    }

    #[test]
    fn test_row_accepts_numeric_keys() {
        let row: FacetValueRow = serde_json::from_value(json!({
            "facet_value": 12,
            "parent_id": 4,
            "depth": 1,
            "counter": "7",
            "facet_display_value": "Espresso"
        }))
        .unwrap();

        assert_eq!(row.facet_value, "12");
        assert_eq!(row.parent_id.as_deref(), Some("4"));
        assert_eq!(row.count(), 7);
        assert_eq!(row.display_value(), "Espresso");
    }

    #[test]
    fn test_row_round_trip_keeps_payload() {
        let input = json!({
            "facet_value": "coffee",
            "depth": 0,
            "counter": 3,
            "term_id": 9
        });
        let row: FacetValueRow = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&row).unwrap(), input);
    }
}
