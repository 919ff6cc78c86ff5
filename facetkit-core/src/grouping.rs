use crate::models::Facet;
use std::collections::BTreeMap;

/// Group facets by their type tag
/// Facets without a type go to the "_untyped_" group
pub fn group_facets_by_type(facets: &[Facet]) -> BTreeMap<String, Vec<&Facet>> {
    let mut groups: BTreeMap<String, Vec<&Facet>> = BTreeMap::new();

    for facet in facets {
        let key = facet.facet_type.as_deref().unwrap_or("_untyped_");
        groups.entry(key.to_string()).or_default().push(facet);
    }

    groups
}
