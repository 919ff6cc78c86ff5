use colored::Colorize;
use facetkit_core::{group_facets_by_type, Facet, FacetValueRow, TermDepth};
use indexmap::IndexMap;

/// Format facets grouped by type as a markdown-ish listing
pub fn format_facet_groups(facets: &[Facet]) -> String {
    let mut lines = Vec::new();

    for (facet_type, group) in group_facets_by_type(facets) {
        lines.push(format!("## {} ({})", facet_type.bold(), group.len()));
        for facet in group {
            let source = facet.source.as_deref().unwrap_or("-");
            lines.push(format!(
                "- **{}** {} [{}]",
                facet.name,
                facet.display_label().dimmed(),
                source
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Format term names as "id: name" lines
pub fn format_terms(terms: &IndexMap<u64, String>) -> String {
    terms
        .iter()
        .map(|(id, name)| format!("{:>6}: {}", id, name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format term depths, indenting each term by its depth
pub fn format_depths(depths: &IndexMap<u64, TermDepth>, names: &IndexMap<u64, String>) -> String {
    depths
        .iter()
        .map(|(id, info)| {
            let name = names.get(id).map(String::as_str).unwrap_or("?");
            format!(
                "{}{} (id {}, parent {}, depth {})",
                "  ".repeat(info.depth as usize),
                name,
                id,
                info.parent_id,
                info.depth
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format facet values as an indented list with their order paths
pub fn format_values(values: &[FacetValueRow]) -> String {
    values
        .iter()
        .map(|row| {
            let order = row.order.as_deref().unwrap_or("-");
            format!(
                "{}{} ({}) {}",
                "  ".repeat(row.depth as usize),
                row.display_value(),
                row.count(),
                order.dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use facetkit_core::{taxonomy_terms, term_depths, Term};

    #[test]
    fn test_format_depths_indents_children() {
        let terms = vec![
            Term { term_id: 1, name: "Drinks".to_string(), parent: 0 },
            Term { term_id: 2, name: "Coffee".to_string(), parent: 1 },
        ];
        let output = format_depths(&term_depths(&terms), &taxonomy_terms(&terms));
        assert_eq!(
            output,
            "Drinks (id 1, parent 0, depth 0)\n  Coffee (id 2, parent 1, depth 1)"
        );
    }

    #[test]
    fn test_format_values() {
        colored::control::set_override(false);
        let mut child = FacetValueRow::new("latte", Some("coffee"), 1).with("counter", 2);
        child.order = Some("0.1".to_string());
        let output = format_values(&[child]);
        assert_eq!(output, "  latte (2) 0.1");
    }
}
