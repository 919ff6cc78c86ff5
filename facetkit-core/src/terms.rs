use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{FacetError, Result};
use crate::models::{Term, TermDepth};

/// Parent walks stop after this many hops, which breaks parent cycles
pub const MAX_TERM_DEPTH: u32 = 50;

/// Supplies the terms of a named taxonomy
pub trait TermSource {
    fn terms(&self, taxonomy: &str) -> Result<Vec<Term>>;
}

/// Terms held in memory, keyed by taxonomy name
///
/// The JSON form is an object of taxonomy name to term list:
/// `{ "category": [{ "term_id": 1, "name": "Coffee", "parent": 0 }] }`
#[derive(Debug, Clone, Default)]
pub struct JsonTermSource {
    taxonomies: HashMap<String, Vec<Term>>,
}

impl JsonTermSource {
    pub fn from_value(value: Value) -> Result<Self> {
        let taxonomies = serde_json::from_value(value)?;
        Ok(Self { taxonomies })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| FacetError::io(path, e))?;
        let taxonomies = serde_json::from_str(&contents)?;
        Ok(Self { taxonomies })
    }

    pub fn insert(&mut self, taxonomy: impl Into<String>, terms: Vec<Term>) {
        self.taxonomies.insert(taxonomy.into(), terms);
    }

    pub fn taxonomy_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.taxonomies.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}

impl TermSource for JsonTermSource {
    fn terms(&self, taxonomy: &str) -> Result<Vec<Term>> {
        self.taxonomies
            .get(taxonomy)
            .cloned()
            .ok_or_else(|| FacetError::UnknownTaxonomy(taxonomy.to_string()))
    }
}

/// Map term ids to term names, keeping source order
pub fn taxonomy_terms(terms: &[Term]) -> IndexMap<u64, String> {
    terms
        .iter()
        .map(|term| (term.term_id, term.name.clone()))
        .collect()
}

/// Compute each term's parent and depth
///
/// Depth counts the parent hops up to a top-level term. A parent id that is
/// not part of the taxonomy ends the walk. Cyclic parent chains are cut off
/// at [`MAX_TERM_DEPTH`].
pub fn term_depths(terms: &[Term]) -> IndexMap<u64, TermDepth> {
    let parents: HashMap<u64, u64> = terms.iter().map(|t| (t.term_id, t.parent)).collect();
    let mut output = IndexMap::with_capacity(terms.len());

    for term in terms {
        let mut depth = 0;
        let mut current = term.parent;
        while current > 0 {
            if depth == MAX_TERM_DEPTH {
                tracing::warn!(
                    term_id = term.term_id,
                    "term parent chain exceeds {} levels, truncating",
                    MAX_TERM_DEPTH
                );
                break;
            }
            depth += 1;
            current = parents.get(&current).copied().unwrap_or(0);
        }

        output.insert(
            term.term_id,
            TermDepth {
                parent_id: term.parent,
                depth,
            },
        );
    }

    output
}
