use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and validating the input files.
///
/// Every variant is fatal at startup: the dashboard never runs on a
/// partial set of tables.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("unsupported file extension '.{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("{path}: missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path}, row {row}: column '{column}' has invalid value '{value}'")]
    InvalidCell {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{path}: table has no rows")]
    EmptyTable { path: PathBuf },

    #[error("{path}: expected a GeoJSON FeatureCollection")]
    NotAFeatureCollection { path: PathBuf },

    #[error("{path}: contains no usable state boundaries")]
    NoFeatures { path: PathBuf },
}

/// Failure to reduce a row subset to a single value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// MEAN over zero rows.
    #[error("cannot average '{measure}' over an empty subset")]
    Empty { measure: String },
}
