use std::collections::HashMap;

/// Parse selection strings in the format "facet=value" into a selection map
/// Multiple values for the same facet are collected into a vector
pub fn parse_selections(selection_strings: &[String]) -> HashMap<String, Vec<String>> {
    let mut selections = HashMap::new();

    for selection in selection_strings {
        if let Some((facet, value)) = selection.split_once('=') {
            selections
                .entry(facet.trim().to_string())
                .or_insert_with(Vec::new)
                .push(value.trim().to_string());
        }
    }

    selections
}

/// Selected values for one facet, empty when nothing is selected
pub fn selected_for<'a>(selections: &'a HashMap<String, Vec<String>>, facet: &str) -> &'a [String] {
    selections.get(facet).map(Vec::as_slice).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selections() {
        let input = vec![
            "color = red".to_string(),
            "color=blue".to_string(),
            "price=10".to_string(),
            "malformed".to_string(),
        ];
        let selections = parse_selections(&input);

        assert_eq!(selections.len(), 2);
        assert_eq!(selected_for(&selections, "color"), ["red", "blue"]);
        assert_eq!(selected_for(&selections, "price"), ["10"]);
        assert!(selected_for(&selections, "size").is_empty());
    }
}
