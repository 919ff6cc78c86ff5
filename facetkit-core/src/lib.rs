// Public modules
pub mod error;
pub mod facet_types;
pub mod filtering;
pub mod grouping;
pub mod hierarchy;
pub mod io;
pub mod models;
pub mod sanitize;
pub mod schema_validation;
pub mod settings;
pub mod sorting;
pub mod terms;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{FacetError, Result};
pub use facet_types::{facet_order, BuiltinFacet, BuiltinKind, FacetType, FacetTypeRegistry};
pub use filtering::{parse_selections, selected_for};
pub use grouping::group_facets_by_type;
pub use hierarchy::{compare_order, sort_taxonomy_values, OrderKey};
pub use io::{load_settings, load_values, parse_settings, save_settings};
pub use models::{Facet, FacetValueRow, Settings, Template, Term, TermDepth};
pub use sanitize::{add_slashes, sanitize};
pub use schema_validation::{settings_schema, validate_against_schema};
pub use settings::{facet_setting_exists, http_host, SettingsLoader};
pub use sorting::{normalize_for_sorting, sort_facet_values, strip_leading_articles, FacetOrder};
pub use terms::{taxonomy_terms, term_depths, JsonTermSource, TermSource, MAX_TERM_DEPTH};
pub use validation::validate_settings;
