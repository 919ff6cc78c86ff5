//! Hierarchical ordering of facet values
//!
//! The indexer returns rows sorted by depth and then by name or count. To
//! display them as a nested list every child has to follow its parent, so
//! each row gets a dotted position path (`"3"`, `"3.7"`, `"3.7.12"`) built
//! from its parent's path and its own input index. Sorting on that path
//! groups each subtree under its root while keeping sibling order intact.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{FacetError, Result};
use crate::models::FacetValueRow;

/// Dotted position path compared segment by segment as integers
///
/// A path that is a prefix of another sorts first, so parents precede
/// their children.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey(Vec<u64>);

impl OrderKey {
    pub fn root(index: usize) -> Self {
        OrderKey(vec![index as u64])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index as u64);
        OrderKey(segments)
    }

    pub fn segments(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for OrderKey {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self> {
        let segments = s
            .split('.')
            .map(|part| part.trim().parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| FacetError::InvalidOrderKey(s.to_string()))?;
        Ok(OrderKey(segments))
    }
}

/// Compare two dotted order strings numerically ("1.9" < "1.10")
pub fn compare_order(a: &str, b: &str) -> Result<Ordering> {
    let a: OrderKey = a.parse()?;
    let b: OrderKey = b.parse()?;
    Ok(a.cmp(&b))
}

/// Move child rows directly below their parents
///
/// Input must already be sorted by depth and then by the display order
/// (name or count). Each returned row carries its dotted path in `order`.
/// A child whose parent did not appear earlier in the input fails the whole
/// call with [`FacetError::UnresolvedParent`].
pub fn sort_taxonomy_values(values: Vec<FacetValueRow>) -> Result<Vec<FacetValueRow>> {
    let mut paths: HashMap<String, OrderKey> = HashMap::with_capacity(values.len());
    let mut keyed = Vec::with_capacity(values.len());

    for (index, row) in values.into_iter().enumerate() {
        let key = if row.depth == 0 {
            OrderKey::root(index)
        } else {
            let parent_id = row.parent_id.as_deref().unwrap_or_default();
            match paths.get(parent_id) {
                Some(parent) => parent.child(index),
                None => {
                    return Err(FacetError::UnresolvedParent {
                        facet_value: row.facet_value,
                        parent_id: parent_id.to_string(),
                    })
                }
            }
        };
        paths.insert(row.facet_value.clone(), key.clone());
        keyed.push((key, row));
    }

    // sort_by is stable, equal paths keep input order
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::debug!(rows = keyed.len(), "sorted facet values hierarchically");

    Ok(keyed
        .into_iter()
        .map(|(key, mut row)| {
            row.order = Some(key.to_string());
            row
        })
        .collect())
}
