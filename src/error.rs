//! Error types for the map pipeline.

use thiserror::Error;

use crate::data::Fips;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while fetching, joining or drawing the map.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A dataset could not be retrieved (network, HTTP status, or file I/O).
    #[error("couldn't fetch {name}: {reason}")]
    Fetch { name: &'static str, reason: String },

    /// A dataset was retrieved but is not valid JSON of the expected shape.
    #[error("couldn't parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The education dataset contains no records, so no scale can be fit.
    #[error("education dataset is empty")]
    EmptyDataset,

    /// Two education records share the same FIPS code.
    #[error("duplicate FIPS code {0} in education dataset")]
    DuplicateFips(Fips),

    /// A county feature refers to a FIPS code absent from the education dataset.
    #[error("no education record for FIPS code {0}")]
    UnknownFips(Fips),

    /// A county feature has no usable numeric id.
    #[error("feature #{index} in '{group}' has no FIPS id")]
    MissingFeatureId { group: &'static str, index: usize },

    /// The topology payload lacks one of the required object groups.
    #[error("topology has no '{0}' object")]
    MissingObject(&'static str),

    /// The topology payload is structurally inconsistent.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
