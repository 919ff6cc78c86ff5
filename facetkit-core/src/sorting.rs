use crate::models::FacetValueRow;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Order of facet values within a depth level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetOrder {
    /// Most results first
    #[default]
    Count,
    /// Alphabetical by display value
    Name,
}

impl FromStr for FacetOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" => Ok(FacetOrder::Count),
            "name" | "display_value" => Ok(FacetOrder::Name),
            other => Err(format!("unknown facet order '{}', expected 'count' or 'name'", other)),
        }
    }
}

/// Sort rows by depth, then by count or display name
///
/// This is the order the hierarchical sort expects as input.
pub fn sort_facet_values(values: &mut [FacetValueRow], order: FacetOrder) {
    values.sort_by(|a, b| {
        a.depth.cmp(&b.depth).then_with(|| match order {
            FacetOrder::Count => b.count().cmp(&a.count()).then_with(|| compare_names(a, b)),
            FacetOrder::Name => compare_names(a, b),
        })
    });
}

fn compare_names(a: &FacetValueRow, b: &FacetValueRow) -> Ordering {
    let a_key = normalize_for_sorting(a.display_value());
    let b_key = normalize_for_sorting(b.display_value());

    match a_key.cmp(&b_key) {
        // Secondary sort: original value for ties
        Ordering::Equal => a.display_value().cmp(b.display_value()),
        other => other,
    }
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
/// Supports: a, an, the (English) and common articles in other languages
pub fn strip_leading_articles(s: &str) -> String {
    static ARTICLES: OnceLock<Regex> = OnceLock::new();
    let re = ARTICLES.get_or_init(|| {
        Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|i|gli|un|une|een)\s+")
            .expect("article pattern is valid")
    });
    re.replace(s, "").to_string()
}
