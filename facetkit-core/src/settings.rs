//! Settings lookups and load-time extension points

use serde_json::Value;

use crate::error::Result;
use crate::io::parse_settings;
use crate::models::{Facet, Settings, Template};

type FacetHook = Box<dyn Fn(Vec<Facet>) -> Vec<Facet> + Send + Sync>;
type TemplateHook = Box<dyn Fn(Vec<Template>) -> Vec<Template> + Send + Sync>;

impl Settings {
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Find a facet by name, `None` when there is no such facet
    pub fn facet_by_name(&self, name: &str) -> Option<&Facet> {
        self.facets.iter().find(|facet| facet.name == name)
    }

    /// Find a template by name, `None` when there is no such template
    pub fn template_by_name(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.name == name)
    }
}

/// Builds [`Settings`] from a raw blob, running registered transforms
///
/// Transforms run in registration order, after parsing.
#[derive(Default)]
pub struct SettingsLoader {
    facet_hooks: Vec<FacetHook>,
    template_hooks: Vec<TemplateHook>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_facets<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<Facet>) -> Vec<Facet> + Send + Sync + 'static,
    {
        self.facet_hooks.push(Box::new(hook));
        self
    }

    pub fn on_templates<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<Template>) -> Vec<Template> + Send + Sync + 'static,
    {
        self.template_hooks.push(Box::new(hook));
        self
    }

    pub fn load_str(&self, json: &str) -> Result<Settings> {
        Ok(self.apply(parse_settings(json)?))
    }

    pub fn load_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<Settings> {
        Ok(self.apply(crate::io::load_settings(path)?))
    }

    pub fn apply(&self, mut settings: Settings) -> Settings {
        for hook in &self.facet_hooks {
            settings.facets = hook(std::mem::take(&mut settings.facets));
        }
        for hook in &self.template_hooks {
            settings.templates = hook(std::mem::take(&mut settings.templates));
        }
        settings
    }
}

/// Does any facet have `setting_name` set to `setting_value`?
///
/// Strings and numbers compare loosely, so `"5"` matches `5`.
pub fn facet_setting_exists(setting_name: &str, setting_value: &Value, facets: &[Facet]) -> bool {
    facets.iter().any(|facet| {
        facet
            .setting(setting_name)
            .is_some_and(|value| loose_eq(&value, setting_value))
    })
}

fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(s), Value::Number(n)) | (Value::Number(n), Value::String(s)) => {
            match (s.trim().parse::<f64>(), n.as_f64()) {
                (Ok(x), Some(y)) => x == y,
                _ => false,
            }
        }
        _ => a == b,
    }
}

/// Hostname part of the site's home URL
pub fn http_host(home_url: &str) -> Option<String> {
    url::Url::parse(home_url)
        .ok()?
        .host_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> Settings {
        serde_json::from_value(json!({
            "facets": [
                {"name": "categories", "type": "checkboxes", "source": "tax/category", "hierarchical": "yes"},
                {"name": "price", "type": "slider", "source": "cf/price", "step": 5}
            ],
            "templates": [
                {"name": "shop", "label": "Shop", "query": "post_type=product"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_lookup_by_name() {
        let settings = settings();
        assert_eq!(settings.facets().len(), 2);
        assert_eq!(
            settings.facet_by_name("price").and_then(|f| f.source.as_deref()),
            Some("cf/price")
        );
        assert!(settings.facet_by_name("missing").is_none());

        assert_eq!(settings.template_by_name("shop").unwrap().label.as_deref(), Some("Shop"));
        assert!(settings.template_by_name("blog").is_none());
    }

    #[test]
    fn test_facet_setting_exists() {
        let settings = settings();
        let facets = settings.facets();

        assert!(facet_setting_exists("type", &json!("slider"), facets));
        assert!(facet_setting_exists("hierarchical", &json!("yes"), facets));
        assert!(facet_setting_exists("step", &json!("5"), facets));
        assert!(!facet_setting_exists("type", &json!("dropdown"), facets));
        assert!(!facet_setting_exists("color", &json!("red"), facets));
        assert!(!facet_setting_exists("type", &json!("slider"), &[]));
    }

    #[test]
    fn test_loader_hooks_run_in_order() {
        let loader = SettingsLoader::new()
            .on_facets(|mut facets| {
                facets.retain(|f| f.name != "price");
                facets
            })
            .on_facets(|mut facets| {
                for facet in &mut facets {
                    facet.label = Some(facet.name.to_uppercase());
                }
                facets
            })
            .on_templates(|_| Vec::new());

        let loaded = loader
            .load_str(&serde_json::to_string(&settings()).unwrap())
            .unwrap();

        assert_eq!(loaded.facets.len(), 1);
        assert_eq!(loaded.facets[0].label.as_deref(), Some("CATEGORIES"));
        assert!(loaded.templates.is_empty());
    }

    #[test]
    fn test_loader_without_hooks_on_empty_blob() {
        let loaded = SettingsLoader::new().load_str("null").unwrap();
        assert!(loaded.facets().is_empty());
        assert!(loaded.templates().is_empty());
    }

    #[test]
    fn test_http_host() {
        assert_eq!(http_host("https://shop.example.com/store"), Some("shop.example.com".to_string()));
        assert_eq!(http_host("not a url"), None);
    }
}
