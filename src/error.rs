//! Error types for the csw-publish library

use thiserror::Error;

/// Result type alias for csw-publish operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the csw-publish library
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing command argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file problem
    #[error("config error: {0}")]
    Config(String),

    /// URL or value parsing failure
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error reading a record file or the config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure (connect error, timeout)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog endpoint answered with a non-success HTTP status
    #[error("catalog endpoint returned HTTP status {0}")]
    Status(u16),

    /// The catalog response body was not parseable XML
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
