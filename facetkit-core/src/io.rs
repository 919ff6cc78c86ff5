use crate::error::{FacetError, Result};
use crate::models::{FacetValueRow, Settings};
use std::fs;
use std::path::Path;

/// Load settings from a JSON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| FacetError::io(path, e))?;
    let settings = parse_settings(&contents)?;
    tracing::debug!(
        path = %path.display(),
        facets = settings.facets.len(),
        templates = settings.templates.len(),
        "loaded settings"
    );
    Ok(settings)
}

/// Parse a settings blob; an empty or `null` blob yields empty settings
pub fn parse_settings(json: &str) -> Result<Settings> {
    if json.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Option<Settings> = serde_json::from_str(json)?;
    Ok(settings.unwrap_or_default())
}

/// Save settings to a JSON file with pretty printing
pub fn save_settings<P: AsRef<Path>>(settings: &Settings, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(|e| FacetError::io(path, e))?;
    Ok(())
}

/// Load a list of facet value rows from a JSON file
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<Vec<FacetValueRow>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| FacetError::io(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Facet;
    use serde_json::Map;

    #[test]
    fn test_parse_empty_blob() {
        assert!(parse_settings("").unwrap().facets.is_empty());
        assert!(parse_settings("null").unwrap().templates.is_empty());
        assert!(parse_settings("{}").unwrap().facets.is_empty());
    }

    #[test]
    fn test_parse_invalid_blob() {
        assert!(matches!(parse_settings("{facets"), Err(FacetError::Json(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            facets: vec![Facet {
                name: "color".to_string(),
                label: Some("Color".to_string()),
                facet_type: Some("checkboxes".to_string()),
                source: Some("tax/pa_color".to_string()),
                extra: Map::new(),
            }],
            templates: Vec::new(),
            extra: Map::new(),
        };
        save_settings(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.facets, settings.facets);
        assert!(loaded.templates.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FacetError::Io { .. }));
    }

    #[test]
    fn test_load_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        fs::write(
            &path,
            r#"[{"facet_value": "a", "depth": 0}, {"facet_value": "b", "parent_id": "a", "depth": 1}]"#,
        )
        .unwrap();

        let rows = load_values(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].parent_id.as_deref(), Some("a"));
    }
}
