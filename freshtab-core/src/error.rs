/// Structured error types for the freshtab-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (freshtab-tui) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Main error type for freshtab-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Config file exists but could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML
    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Location string is not an absolute path
    #[error("Invalid location '{location}': {reason}")]
    LocationSyntax { location: String, reason: String },

    /// Query parameter carries undecodable percent data
    #[error("Invalid query encoding in '{location}': {source}")]
    QueryEncoding {
        location: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// Result type alias for freshtab-core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a location syntax error
    pub fn location_syntax(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LocationSyntax {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Create a query encoding error
    pub fn query_encoding(location: impl Into<String>, source: FromUtf8Error) -> Self {
        Self::QueryEncoding {
            location: location.into(),
            source,
        }
    }
}
