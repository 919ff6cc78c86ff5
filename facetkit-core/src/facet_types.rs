//! Facet types and the registry that maps a facet's `type` tag to one
//!
//! Each facet type decides how its raw values are ordered and how they are
//! displayed. The built-in set covers the stock facet types; callers can add
//! or replace types with [`FacetTypeRegistry::register`].

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::{FacetError, Result};
use crate::hierarchy::sort_taxonomy_values;
use crate::models::{Facet, FacetValueRow};
use crate::sorting::{sort_facet_values, FacetOrder};

pub trait FacetType: Send + Sync {
    fn name(&self) -> &str;

    /// Whether this facet's values form a parent/child tree
    fn is_hierarchical(&self, _facet: &Facet) -> bool {
        false
    }

    /// Put raw indexer rows into display order
    fn prepare_values(&self, facet: &Facet, mut values: Vec<FacetValueRow>) -> Result<Vec<FacetValueRow>> {
        sort_facet_values(&mut values, facet_order(facet));
        if self.is_hierarchical(facet) {
            sort_taxonomy_values(values)
        } else {
            Ok(values)
        }
    }

    /// Plain-text rendering of the facet with its values
    fn render(&self, facet: &Facet, values: &[FacetValueRow], selected: &[String]) -> String;
}

/// The facet's `orderby` setting, counting by default
pub fn facet_order(facet: &Facet) -> FacetOrder {
    facet
        .setting("orderby")
        .and_then(|v| v.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Autocomplete,
    Checkboxes,
    DateRange,
    Dropdown,
    Hierarchy,
    NumberRange,
    Search,
    Slider,
}

impl BuiltinKind {
    pub const ALL: [BuiltinKind; 8] = [
        BuiltinKind::Autocomplete,
        BuiltinKind::Checkboxes,
        BuiltinKind::DateRange,
        BuiltinKind::Dropdown,
        BuiltinKind::Hierarchy,
        BuiltinKind::NumberRange,
        BuiltinKind::Search,
        BuiltinKind::Slider,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            BuiltinKind::Autocomplete => "autocomplete",
            BuiltinKind::Checkboxes => "checkboxes",
            BuiltinKind::DateRange => "date_range",
            BuiltinKind::Dropdown => "dropdown",
            BuiltinKind::Hierarchy => "hierarchy",
            BuiltinKind::NumberRange => "number_range",
            BuiltinKind::Search => "search",
            BuiltinKind::Slider => "slider",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BuiltinFacet(pub BuiltinKind);

impl FacetType for BuiltinFacet {
    fn name(&self) -> &str {
        self.0.tag()
    }

    fn is_hierarchical(&self, facet: &Facet) -> bool {
        match self.0 {
            BuiltinKind::Hierarchy => true,
            BuiltinKind::Checkboxes => facet.setting("hierarchical") == Some(Value::from("yes")),
            _ => false,
        }
    }

    fn render(&self, facet: &Facet, values: &[FacetValueRow], selected: &[String]) -> String {
        let mut lines = vec![facet.display_label().to_string()];

        match self.0 {
            BuiltinKind::Checkboxes | BuiltinKind::Hierarchy => {
                for row in values {
                    let mark = if is_selected(row, selected) { "[x]" } else { "[ ]" };
                    lines.push(format!(
                        "{}{} {} ({})",
                        "  ".repeat(row.depth as usize + 1),
                        mark,
                        row.display_value(),
                        row.count()
                    ));
                }
            }
            BuiltinKind::Dropdown => {
                for row in values {
                    let mark = if is_selected(row, selected) { ">" } else { " " };
                    lines.push(format!("  {} {} ({})", mark, row.display_value(), row.count()));
                }
            }
            BuiltinKind::Autocomplete => {
                if !selected.is_empty() {
                    lines.push(format!("  selected: {}", selected.join(", ")));
                }
                lines.push(format!("  {} suggestions", values.len()));
            }
            BuiltinKind::Search => {
                lines.push(format!("  search: \"{}\"", selected.join(" ")));
            }
            BuiltinKind::DateRange | BuiltinKind::NumberRange | BuiltinKind::Slider => {
                match value_bounds(values, self.0 == BuiltinKind::DateRange) {
                    Some((min, max)) => lines.push(format!("  range: {} .. {}", min, max)),
                    None => lines.push("  range: none".to_string()),
                }
                if let [from, to, ..] = selected {
                    lines.push(format!("  selected: {} .. {}", from, to));
                }
            }
        }

        lines.join("\n")
    }
}

fn is_selected(row: &FacetValueRow, selected: &[String]) -> bool {
    selected.iter().any(|s| *s == row.facet_value)
}

// Dates compare as ISO strings, everything else numerically.
fn value_bounds(values: &[FacetValueRow], as_dates: bool) -> Option<(String, String)> {
    if as_dates {
        let min = values.iter().map(|r| r.facet_value.as_str()).min()?;
        let max = values.iter().map(|r| r.facet_value.as_str()).max()?;
        return Some((min.to_string(), max.to_string()));
    }

    let numbers: Vec<f64> = values
        .iter()
        .filter_map(|r| r.facet_value.trim().parse::<f64>().ok())
        .collect();
    let min = numbers.iter().copied().reduce(f64::min)?;
    let max = numbers.iter().copied().reduce(f64::max)?;
    Some((min.to_string(), max.to_string()))
}

/// Facet types keyed by their `type` tag
#[derive(Default)]
pub struct FacetTypeRegistry {
    types: BTreeMap<String, Box<dyn FacetType>>,
}

impl FacetTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in BuiltinKind::ALL {
            registry.register(kind.tag(), Box::new(BuiltinFacet(kind)));
        }
        registry
    }

    /// Add a facet type, returning the one it replaced
    pub fn register(
        &mut self,
        name: impl Into<String>,
        facet_type: Box<dyn FacetType>,
    ) -> Option<Box<dyn FacetType>> {
        self.types.insert(name.into(), facet_type)
    }

    pub fn get(&self, name: &str) -> Option<&dyn FacetType> {
        self.types.get(name).map(|t| t.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Resolve the type of a configured facet
    pub fn type_for(&self, facet: &Facet) -> Result<&dyn FacetType> {
        let tag = facet.facet_type.as_deref().unwrap_or_default();
        self.get(tag)
            .ok_or_else(|| FacetError::UnknownFacetType(tag.to_string()))
    }
}

impl fmt::Debug for FacetTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetTypeRegistry")
            .field("types", &self.names())
            .finish()
    }
}
