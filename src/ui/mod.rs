pub mod formatting;

pub use formatting::{format_depths, format_facet_groups, format_terms, format_values};
