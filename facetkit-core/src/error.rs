use thiserror::Error;

/// Errors raised by the facet helpers
///
/// Lookups by name never produce an error; they return `None` instead.
#[derive(Debug, Error)]
pub enum FacetError {
    #[error("failed to read or write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A child row referenced a parent that was not seen earlier in the input
    #[error("unresolved parent reference '{parent_id}' for facet value '{facet_value}'")]
    UnresolvedParent {
        facet_value: String,
        parent_id: String,
    },

    #[error("unknown facet type '{0}'")]
    UnknownFacetType(String),

    #[error("unknown taxonomy '{0}'")]
    UnknownTaxonomy(String),

    #[error("invalid order key '{0}'")]
    InvalidOrderKey(String),
}

impl FacetError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        FacetError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FacetError>;
