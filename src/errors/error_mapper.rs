use facetkit_core::FacetError;

/// Map a command failure to user-friendly messages
/// Returns (title, details)
pub fn map_error(error: &anyhow::Error) -> (String, String) {
    let Some(facet_error) = error.chain().find_map(|e| e.downcast_ref::<FacetError>()) else {
        return ("Error".to_string(), format!("{:#}", error));
    };

    match facet_error {
        FacetError::Io { path, source } => match source.kind() {
            std::io::ErrorKind::NotFound => (
                "File Not Found".to_string(),
                format!("Path: {}\n\nPlease verify the file exists.", path),
            ),
            std::io::ErrorKind::PermissionDenied => (
                "Permission Denied".to_string(),
                format!("You don't have permission to access this file:\n{}", path),
            ),
            _ => ("I/O Error".to_string(), format!("{:#}", error)),
        },
        FacetError::Json(_) => ("Invalid JSON".to_string(), format!("{:#}", error)),
        FacetError::UnresolvedParent { facet_value, parent_id } => (
            "Broken Hierarchy".to_string(),
            format!(
                "Value '{}' points at parent '{}', which does not appear before it.\n\n\
                 Rows must be sorted by depth so every parent precedes its children.",
                facet_value, parent_id
            ),
        ),
        FacetError::UnknownFacetType(tag) => (
            "Unknown Facet Type".to_string(),
            format!("No facet type is registered under '{}'.", tag),
        ),
        FacetError::UnknownTaxonomy(name) => (
            "Unknown Taxonomy".to_string(),
            format!("The terms file has no taxonomy named '{}'.", name),
        ),
        FacetError::InvalidOrderKey(key) => (
            "Invalid Order Key".to_string(),
            format!("'{}' is not a dotted list of numbers.", key),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_maps_wrapped_facet_error() {
        let result: Result<(), FacetError> = Err(FacetError::UnresolvedParent {
            facet_value: "latte".to_string(),
            parent_id: "coffee".to_string(),
        });
        let error = result.context("sorting values").unwrap_err();

        let (title, details) = map_error(&error);
        assert_eq!(title, "Broken Hierarchy");
        assert!(details.contains("'latte'"));
    }

    #[test]
    fn test_maps_missing_file() {
        let error = anyhow::Error::new(FacetError::Io {
            path: "settings.json".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        let (title, details) = map_error(&error);
        assert_eq!(title, "File Not Found");
        assert!(details.contains("settings.json"));
    }

    #[test]
    fn test_other_errors_fall_through() {
        let error = anyhow::anyhow!("facet 'color' not found");
        assert_eq!(map_error(&error).0, "Error");
    }
}
