//! Defines [`Error`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The `type` member does not name the envelope or geometry expected at
    /// this level. Carries the offending tag.
    #[error("GeoJSON type is not supported: {0:?}")]
    UnsupportedType(String),

    /// Input is not well-formed JSON, or a member has the wrong shape.
    #[error("malformed GeoJSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The host properties value could not be serialized or deserialized.
    #[error("properties codec failed: {0}")]
    PropertiesCodec(#[source] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err)
    }
}

impl Error {
    pub(crate) fn unsupported(tag: &str) -> Self {
        log::debug!("rejecting GeoJSON type {:?}", tag);
        Error::UnsupportedType(tag.to_string())
    }
}
