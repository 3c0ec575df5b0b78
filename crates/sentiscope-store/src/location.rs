//! Connection string parsing.

use std::fmt;
use std::path::PathBuf;

use sentiscope_core::StoreError;

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Memory,
    File(PathBuf),
}

impl Location {
    pub fn parse(url: &str) -> Result<Self, StoreError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StoreError::UnsupportedUrl("empty connection string".into()));
        }

        let rest = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);

        if rest.contains("://") {
            return Err(StoreError::UnsupportedUrl(scheme_of(url).to_string()));
        }

        match rest {
            ":memory:" => Ok(Location::Memory),
            "" => Err(StoreError::UnsupportedUrl(url.to_string())),
            path => Ok(Location::File(PathBuf::from(path))),
        }
    }
}

// Only the scheme goes into the error; the rest may carry credentials.
fn scheme_of(url: &str) -> &str {
    url.split("://").next().unwrap_or(url)
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Memory => write!(f, ":memory:"),
            Location::File(path) => write!(f, "{}", path.display()),
        }
    }
}
