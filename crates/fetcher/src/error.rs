//! Error types for the fetcher with context on what failed and where

use std::path::PathBuf;
use thiserror::Error;

use crate::marketplace::PackageIdentity;

/// Errors produced while resolving and downloading a package
///
/// Every variant is terminal for the invocation that produced it; there is
/// no retry anywhere. `VsixFetcher::fetch_package` converts each of these to
/// a status event at its boundary, so none of them escape to the embedding.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The marketplace page URL failed the shape check
    #[error("invalid marketplace URL '{url}' (expected https://marketplace.visualstudio.com/items?itemName=publisher.extension)")]
    InvalidMarketplaceUrl { url: String },

    /// The version string failed the shape check
    #[error("invalid version '{version}' (expected 'latest' or x.y.z)")]
    InvalidVersion { version: String },

    /// The page URL carries no itemName query parameter
    #[error("no itemName parameter found in '{url}'")]
    MissingItemName { url: String },

    /// itemName did not split into exactly publisher.extension
    #[error("itemName '{item_name}' does not split into publisher.extension")]
    MalformedItemName { item_name: String },

    /// The destination picker returned no path
    #[error("save cancelled")]
    Cancelled,

    /// The HTTP client itself could not be constructed
    #[error("failed to build HTTP client")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// Connection-level failure, including timeouts
    #[error("request to '{url}' failed")]
    HttpRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 404: the marketplace has no such extension/version
    #[error("no package found for '{identity}' version '{version}' (check the version or use 'latest')")]
    NotFound {
        identity: PackageIdentity,
        version: String,
    },

    /// Any other non-2xx response
    #[error("server returned HTTP {status} for '{url}'")]
    RemoteStatus { url: String, status: u16 },

    /// File system I/O errors with file context
    #[error("file operation failed while {operation} '{path}'")]
    FileSystem {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },
}

/// Types of file operations for error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Create,
    Write,
    Move,
    CreateDir,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Create => write!(f, "creating"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::Move => write!(f, "moving"),
            FileOperation::CreateDir => write!(f, "creating directory"),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Check if the failure is an input problem the user can fix without
    /// touching the network or the local machine
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidMarketplaceUrl { .. }
                | FetchError::InvalidVersion { .. }
                | FetchError::MissingItemName { .. }
                | FetchError::MalformedItemName { .. }
                | FetchError::NotFound { .. }
        )
    }
}
