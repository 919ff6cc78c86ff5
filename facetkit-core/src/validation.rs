use crate::facet_types::FacetTypeRegistry;
use crate::models::Settings;
use std::collections::HashSet;

/// Validate the loaded settings against the registered facet types
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_settings(settings: &Settings, registry: &FacetTypeRegistry) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut facet_names = HashSet::new();
    for (idx, facet) in settings.facets.iter().enumerate() {
        let facet_ref = format!("Facet #{} ('{}')", idx + 1, facet.name);

        if facet.name.trim().is_empty() {
            errors.push(format!("{}: name cannot be empty", facet_ref));
        }
        if !facet_names.insert(facet.name.as_str()) {
            errors.push(format!("{}: duplicate facet name", facet_ref));
        }

        match facet.facet_type.as_deref() {
            None => errors.push(format!("{}: missing facet type", facet_ref)),
            Some(tag) if !registry.contains(tag) => {
                errors.push(format!("{}: unknown facet type '{}'", facet_ref, tag));
            }
            Some(_) => {}
        }
    }

    let mut template_names = HashSet::new();
    for (idx, template) in settings.templates.iter().enumerate() {
        let template_ref = format!("Template #{} ('{}')", idx + 1, template.name);

        if template.name.trim().is_empty() {
            errors.push(format!("{}: name cannot be empty", template_ref));
        }
        if !template_names.insert(template.name.as_str()) {
            errors.push(format!("{}: duplicate template name", template_ref));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
