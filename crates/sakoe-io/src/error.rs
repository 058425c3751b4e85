//! Error types for corpus loading and report writing.

use std::path::PathBuf;

use sakoe_dtw::DtwError;

/// Errors from parsing a single corpus line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Returned when a line has no label or no values.
    #[error("expected a label followed by at least one value, found {tokens} token(s)")]
    MissingValues {
        /// Whitespace-separated tokens found on the line.
        tokens: usize,
    },

    /// Returned when a value token does not parse as a real number.
    #[error("value {position} (\"{raw}\") is not a real number")]
    InvalidNumber {
        /// Zero-based position among the value tokens.
        position: usize,
        /// The offending token.
        raw: String,
    },

    /// Returned when a value token parses to NaN or infinity.
    #[error("value {position} (\"{raw}\") is not finite")]
    NonFinite {
        /// Zero-based position among the value tokens.
        position: usize,
        /// The offending token.
        raw: String,
    },

    /// Returned when multivariate values do not split into whole channel tuples.
    #[error("{values} values do not form whole groups of {n_channels} channels")]
    PartialGroup {
        /// Number of value tokens.
        values: usize,
        /// Channels per tuple.
        n_channels: usize,
    },

    /// Wraps any other series validation failure.
    #[error("invalid series: {0}")]
    Series(DtwError),
}

/// Errors from file I/O, corpus parsing, and report serialization.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when reading a line fails midway through the file.
    #[error("read error in {path} at line {line}")]
    Read {
        /// Path to the corpus file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a line is malformed. Loading stops at the first bad line.
    #[error("malformed series in {path} at line {line}")]
    Parse {
        /// Path to the corpus file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        source: ParseError,
    },

    /// Returned when the experiment name contains characters outside `[a-zA-Z0-9_-]`.
    #[error("invalid experiment name \"{name}\": must match [a-zA-Z0-9_-]+")]
    InvalidExperimentName {
        /// The invalid name.
        name: String,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the report cannot be serialized.
    #[error("cannot serialize report for {path}")]
    Serialize {
        /// Destination path of the report.
        path: PathBuf,
        /// Underlying serde_json error.
        source: serde_json::Error,
    },

    /// Returned when a result file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
