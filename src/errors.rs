//! Error types and the crate-wide [`Result`] alias.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeorefError>;

/// Error variants produced by functions in this crate.
#[derive(Debug, Error)]
pub enum GeorefError {
    /// An input failed validation before any work was attempted: wrong
    /// geotransform arity, a non-finite coefficient or angle, an
    /// unrecognized axis token, or an invalid dataset open mode.
    #[error("Bad argument: {0}")]
    BadArgument(String),

    /// The 2x2 pixel submatrix of a geotransform has a zero determinant,
    /// so no inverse transform exists.
    #[error("Geo transform is uninvertible")]
    NonInvertibleGeoTransform,

    /// No registered driver recognized the source.
    #[error("Error opening dataset: '{}'", .0.display())]
    UnsupportedSource(PathBuf),
}
