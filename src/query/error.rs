use thiserror::Error;

/// Rejections raised while decoding a query string under the strict key policy
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("malformed range for `{key}`: {value:?}")]
    MalformedRange { key: String, value: String },

    #[error("invalid page number: {0:?}")]
    InvalidPage(String),

    #[error("unknown amenity id: {0:?}")]
    UnknownAmenity(String),

    #[error("invalid percent-encoding in {0:?}")]
    Encoding(String),
}
